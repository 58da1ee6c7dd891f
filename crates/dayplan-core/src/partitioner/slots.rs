//! Slot resolution: available minutes, derived slot quantity and remainder
//! distribution.

use log::debug;

use crate::{
    error::{Result, ScheduleError},
    models::{Minute, PartitionRequest, WindowSpec},
};

/// Resolved slot lengths in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SlotPlan {
    /// Minutes left for slots once breaks and lunch are taken out
    pub available: Minute,
    /// Length of each slot; sums to `available`
    pub lengths: Vec<Minute>,
}

/// Validates the request against the window and splits the available minutes
/// into slots.
pub(crate) fn resolve(window: &WindowSpec, request: &PartitionRequest) -> Result<SlotPlan> {
    if !window.is_valid() {
        return Err(ScheduleError::invalid_request("window").with_reason(format!(
            "end ({}) must be after start ({})",
            window.end_minute, window.start_minute
        )));
    }

    let quantity = SlotQuantity::from_request(request)?;
    let available = available_minutes(window, request)?;
    let count = quantity.resolve_count(available)?;

    debug!("resolved {count} slots over {available} available minutes");

    Ok(SlotPlan {
        available,
        lengths: distribute(available, count),
    })
}

/// The one slot quantity the caller fixed.
#[derive(Debug, Clone, Copy)]
enum SlotQuantity {
    Count(u32),
    Length(Minute),
}

impl SlotQuantity {
    fn from_request(request: &PartitionRequest) -> Result<Self> {
        match (request.slot_count, request.slot_length) {
            (None, None) => Err(ScheduleError::invalid_request("slot_count")
                .with_reason("either slot_count or slot_length must be provided")),
            (Some(_), Some(_)) => Err(ScheduleError::invalid_request("slot_length")
                .with_reason("slot_count and slot_length are mutually exclusive")),
            (Some(0), None) => Err(ScheduleError::invalid_request("slot_count")
                .with_reason("must be greater than zero")),
            (None, Some(0)) => Err(ScheduleError::invalid_request("slot_length")
                .with_reason("must be greater than zero")),
            (Some(count), None) => Ok(Self::Count(count)),
            (None, Some(length)) => Ok(Self::Length(length)),
        }
    }

    /// Number of slots to lay out. The missing quantity is derived by floor
    /// division and must not come out as zero.
    fn resolve_count(self, available: Minute) -> Result<usize> {
        match self {
            Self::Count(count) => {
                if available / count == 0 {
                    return Err(ScheduleError::overconstrained(format!(
                        "{count} slots do not fit into {available} available minutes"
                    )));
                }
                Ok(count as usize)
            }
            Self::Length(length) => {
                let count = available / length;
                if count == 0 {
                    return Err(ScheduleError::overconstrained(format!(
                        "no {length}-minute slot fits into {available} available minutes"
                    )));
                }
                Ok(count as usize)
            }
        }
    }
}

/// Window minutes minus lunch and all breaks.
fn available_minutes(window: &WindowSpec, request: &PartitionRequest) -> Result<Minute> {
    let total = u64::from(window.total_minutes());
    let lunch = request
        .effective_lunch()
        .map_or(0, |lunch| u64::from(lunch.length));
    let breaks = u64::from(request.effective_break_count()) * u64::from(request.break_length);
    let consumed = lunch + breaks;

    if consumed >= total {
        return Err(ScheduleError::overconstrained(format!(
            "breaks and lunch take {consumed} of {total} minutes"
        )));
    }

    // consumed < total <= Minute::MAX, so the difference fits
    Ok((total - consumed) as Minute)
}

/// Splits `available` minutes across `count` slots as evenly as possible; the
/// first `available % count` slots get one extra minute.
pub(crate) fn distribute(available: Minute, count: usize) -> Vec<Minute> {
    let count_minutes = count as Minute;
    let base = available / count_minutes;
    let remainder = (available - base * count_minutes) as usize;

    (0..count)
        .map(|index| if index < remainder { base + 1 } else { base })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute_gives_remainder_to_first_slots() {
        assert_eq!(distribute(100, 3), vec![34, 33, 33]);
        assert_eq!(distribute(410, 8), vec![52, 52, 51, 51, 51, 51, 51, 51]);
        assert_eq!(distribute(90, 3), vec![30, 30, 30]);
    }

    #[test]
    fn test_resolve_by_length_distributes_leftover() {
        let window = WindowSpec::new(0, 100);
        let plan = resolve(&window, &PartitionRequest::with_slot_length(30)).unwrap();
        assert_eq!(plan.available, 100);
        assert_eq!(plan.lengths, vec![34, 33, 33]);
    }

    #[test]
    fn test_resolve_subtracts_breaks_and_lunch() {
        let window = WindowSpec::new(540, 1020);
        let request = PartitionRequest::with_slot_count(8)
            .with_breaks(1, 10)
            .with_lunch(750, 60);
        let plan = resolve(&window, &request).unwrap();
        assert_eq!(plan.available, 410);
        assert_eq!(plan.lengths.iter().sum::<Minute>(), 410);
    }

    #[test]
    fn test_zero_length_breaks_consume_nothing() {
        let window = WindowSpec::new(0, 60);
        let request = PartitionRequest::with_slot_count(2).with_breaks(5, 0);
        let plan = resolve(&window, &request).unwrap();
        assert_eq!(plan.available, 60);
    }

    #[test]
    fn test_missing_both_quantities() {
        let err = resolve(&WindowSpec::new(0, 60), &PartitionRequest::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRequest { ref field, .. } if field == "slot_count"));
    }

    #[test]
    fn test_both_quantities_rejected() {
        let request = PartitionRequest {
            slot_count: Some(2),
            slot_length: Some(30),
            ..PartitionRequest::default()
        };
        let err = resolve(&WindowSpec::new(0, 60), &request).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRequest { ref field, .. } if field == "slot_length"));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = resolve(&WindowSpec::new(600, 540), &PartitionRequest::with_slot_count(1))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRequest { ref field, .. } if field == "window"));
    }

    #[test]
    fn test_more_slots_than_minutes() {
        let err = resolve(&WindowSpec::new(0, 10), &PartitionRequest::with_slot_count(11))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::OverconstrainedWindow { .. }));
    }

    #[test]
    fn test_slot_longer_than_available() {
        let request = PartitionRequest::with_slot_length(480).with_lunch(750, 60);
        let err = resolve(&WindowSpec::new(540, 1020), &request).unwrap_err();
        assert!(matches!(err, ScheduleError::OverconstrainedWindow { .. }));
    }
}
