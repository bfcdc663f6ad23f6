use crate::types::{finite, RawLapRecord};

/// Laps driven by `identifier`, matched against either the abbreviation or the
/// driver number column.
pub(crate) fn pick_laps<'a>(laps: &'a [RawLapRecord], identifier: &str) -> Vec<&'a RawLapRecord> {
    laps.iter()
        .filter(|lap| {
            lap.driver.as_deref() == Some(identifier)
                || lap.driver_number.as_deref() == Some(identifier)
        })
        .collect()
}

/// Laps whose driver number column equals `number`.
pub(crate) fn pick_by_number<'a>(laps: &'a [RawLapRecord], number: &str) -> Vec<&'a RawLapRecord> {
    laps.iter()
        .filter(|lap| lap.driver_number.as_deref() == Some(number))
        .collect()
}

/// The provider's official fastest pick: quickest lap among those flagged
/// personal best. `None` when no flagged lap has a usable time.
pub(crate) fn pick_fastest<'a, I>(laps: I) -> Option<&'a RawLapRecord>
where
    I: IntoIterator<Item = &'a RawLapRecord>,
{
    pick_fastest_by_time(laps.into_iter().filter(|lap| lap.is_personal_best == Some(true)))
}

/// Quickest lap by time alone, ignoring flags. The earliest row wins ties.
pub(crate) fn pick_fastest_by_time<'a, I>(laps: I) -> Option<&'a RawLapRecord>
where
    I: IntoIterator<Item = &'a RawLapRecord>,
{
    let mut best: Option<(&RawLapRecord, f64)> = None;
    for lap in laps {
        let Some(t) = finite(lap.lap_time) else { continue };
        if best.map_or(true, |(_, b)| t < b) {
            best = Some((lap, t));
        }
    }
    best.map(|(lap, _)| lap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(driver: &str, number: &str, time: Option<f64>, pb: Option<bool>) -> RawLapRecord {
        RawLapRecord {
            driver: Some(driver.into()),
            driver_number: Some(number.into()),
            lap_time: time,
            is_personal_best: pb,
            ..Default::default()
        }
    }

    #[test]
    fn test_pick_laps_matches_either_key() {
        let laps = vec![lap("VER", "1", None, None), lap("HAM", "44", None, None)];
        assert_eq!(pick_laps(&laps, "VER").len(), 1);
        assert_eq!(pick_laps(&laps, "44")[0].driver.as_deref(), Some("HAM"));
        assert!(pick_laps(&laps, "LEC").is_empty());
        assert!(pick_by_number(&laps, "VER").is_empty());
    }

    #[test]
    fn test_fastest_prefers_flagged_laps() {
        let laps = vec![
            lap("VER", "1", Some(80.0), Some(false)),
            lap("VER", "1", Some(82.0), Some(true)),
            lap("VER", "1", Some(f64::NAN), Some(true)),
        ];
        assert_eq!(pick_fastest(&laps).and_then(|l| l.lap_time), Some(82.0));
        assert_eq!(pick_fastest_by_time(&laps).and_then(|l| l.lap_time), Some(80.0));
    }

    #[test]
    fn test_fastest_none_without_flag_or_time() {
        let laps = vec![lap("VER", "1", Some(80.0), None), lap("VER", "1", None, Some(true))];
        assert!(pick_fastest(&laps).is_none());
        assert!(pick_fastest_by_time(&laps[1..]).is_none());
    }
}
