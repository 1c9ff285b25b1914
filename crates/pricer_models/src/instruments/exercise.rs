//! Exercise schedules.

use super::error::{validate_schedule, InstrumentError};

/// When the holder may exercise.
///
/// # Example
///
/// ```
/// use pricer_models::instruments::Exercise;
///
/// let bermudan = Exercise::bermudan(vec![0.5, 1.0, 1.5]).unwrap();
/// assert_eq!(bermudan.last_date(), 1.5);
/// assert!(bermudan.as_european().is_none());
/// assert_eq!(Exercise::european(2.0).unwrap().as_european(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exercise {
    /// At a single date
    European {
        /// Exercise time
        date: f64,
    },
    /// At any time in `[earliest, latest]`
    American {
        /// First exercise time
        earliest: f64,
        /// Last exercise time
        latest: f64,
    },
    /// At any of a set of dates
    Bermudan {
        /// Sorted exercise times
        dates: Vec<f64>,
    },
}

impl Exercise {
    /// European exercise at `date`.
    ///
    /// # Arguments
    ///
    /// * `date` - Exercise time as a year fraction from the valuation date
    ///
    /// # Errors
    ///
    /// `InvalidTime` for a negative or non-finite date.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::Exercise;
    ///
    /// let exercise = Exercise::european(1.5).unwrap();
    /// assert_eq!(exercise.last_date(), 1.5);
    /// assert!(Exercise::european(-1.0).is_err());
    /// ```
    pub fn european(date: f64) -> Result<Self, InstrumentError> {
        validate_schedule(&[date], "exercise", false)?;
        Ok(Exercise::European { date })
    }

    /// American exercise over `[earliest, latest]`.
    pub fn american(earliest: f64, latest: f64) -> Result<Self, InstrumentError> {
        validate_schedule(&[earliest], "exercise", false)?;
        validate_schedule(&[latest], "exercise", false)?;
        if latest < earliest {
            return Err(InstrumentError::UnsortedSchedule {
                what: "exercise",
                index: 1,
            });
        }
        Ok(Exercise::American { earliest, latest })
    }

    /// Bermudan exercise on strictly increasing `dates`.
    pub fn bermudan(dates: Vec<f64>) -> Result<Self, InstrumentError> {
        validate_schedule(&dates, "exercise", false)?;
        Ok(Exercise::Bermudan { dates })
    }

    /// The exercise date, when exercise is European.
    #[inline]
    pub fn as_european(&self) -> Option<f64> {
        match self {
            Exercise::European { date } => Some(*date),
            _ => None,
        }
    }

    /// Latest admissible exercise time.
    pub fn last_date(&self) -> f64 {
        match self {
            Exercise::European { date } => *date,
            Exercise::American { latest, .. } => *latest,
            Exercise::Bermudan { dates } => dates.last().copied().unwrap_or(0.0),
        }
    }

    /// Exercise times; an American window yields its two ends.
    pub fn dates(&self) -> Vec<f64> {
        match self {
            Exercise::European { date } => vec![*date],
            Exercise::American { earliest, latest } => vec![*earliest, *latest],
            Exercise::Bermudan { dates } => dates.clone(),
        }
    }

    /// Short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::European { .. } => "European",
            Exercise::American { .. } => "American",
            Exercise::Bermudan { .. } => "Bermudan",
        }
    }
}
