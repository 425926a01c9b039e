use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use harmonia::ephemeris::GeoLocation;
use harmonia::BirthData;

/// Parse "+HH:MM", "-HH:MM" or "Z" into minutes east of UTC.
pub(crate) fn parse_utc_offset(text: &str) -> anyhow::Result<i32> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("z") {
        return Ok(0);
    }
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => anyhow::bail!("UTC offset must start with + or -, got {text:?}"),
    };
    let (hours, minutes) = rest
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("UTC offset must look like +HH:MM, got {text:?}"))?;
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || !digits(minutes) {
        anyhow::bail!("UTC offset must look like +HH:MM, got {text:?}");
    }
    let hours: i32 = hours.parse().with_context(|| format!("Bad hours in offset {text:?}"))?;
    let minutes: i32 = minutes
        .parse()
        .with_context(|| format!("Bad minutes in offset {text:?}"))?;
    if !(0..60).contains(&minutes) {
        anyhow::bail!("Offset minutes out of range in {text:?}");
    }
    Ok(sign * (hours * 60 + minutes))
}

pub(crate) fn birth_data(
    date: &str,
    time: Option<&str>,
    utc_offset: &str,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<BirthData> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Date must be YYYY-MM-DD, got {date:?}"))?;
    let offset = parse_utc_offset(utc_offset)?;

    let mut birth = match time {
        Some(time) => {
            let time = NaiveTime::parse_from_str(time, "%H:%M")
                .with_context(|| format!("Time must be HH:MM, got {time:?}"))?;
            BirthData::new(date.and_time(time), offset)
        }
        None => BirthData::new(date.and_time(NaiveTime::MIN), offset).with_unknown_time(),
    };

    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                anyhow::bail!("Coordinates out of range: lat {lat}, lon {lon}");
            }
            birth = birth.at(GeoLocation { lat, lon });
        }
        (None, None) => {}
        _ => anyhow::bail!("--lat and --lon must be given together"),
    }
    Ok(birth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offsets() {
        assert_eq!(parse_utc_offset("+05:30").unwrap(), 330);
        assert_eq!(parse_utc_offset("-03:00").unwrap(), -180);
        assert_eq!(parse_utc_offset("Z").unwrap(), 0);
        assert!(parse_utc_offset("0530").is_err());
        assert!(parse_utc_offset("+05:75").is_err());
    }

    #[test]
    fn test_offset_sign_only_in_front() {
        assert!(parse_utc_offset("+-5:00").is_err());
        assert!(parse_utc_offset("-+5:00").is_err());
        assert!(parse_utc_offset("+05:+3").is_err());
        assert!(parse_utc_offset("+:30").is_err());
        assert_eq!(parse_utc_offset("-5:00").unwrap(), -300);
    }

    #[test]
    fn test_birth_without_time_or_place() {
        let birth = birth_data("1992-02-29", None, "+00:00", None, None).unwrap();
        assert!(!birth.time_known);
        assert!(birth.location.is_none());
    }

    #[test]
    fn test_half_a_location_rejected() {
        assert!(birth_data("1992-02-29", Some("10:15"), "+01:00", Some(48.1), None).is_err());
    }
}
