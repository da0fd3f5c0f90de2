//! Decoding of hemisphere-suffixed coordinate strings ("45.5N", "100W").

use crate::error::{GridParseError, GridResult};

/// Decode a latitude string such as `"45.5N"` or `"30S"` into signed degrees.
pub fn decode_latitude(s: &str) -> GridResult<f64> {
    let (value, suffix) = split_suffix(s).ok_or_else(|| GridParseError::InvalidLatitude(s.to_string()))?;
    let lat: f64 = value
        .parse()
        .map_err(|_| GridParseError::InvalidLatitude(s.to_string()))?;
    match suffix {
        'N' => Ok(lat),
        'S' => Ok(-lat),
        _ => Err(GridParseError::InvalidLatitude(s.to_string())),
    }
}

/// Decode a longitude string into east longitude.
///
/// `"100E"` is 100; `"100W"` is `360 - 100 = 260`. Note that `"0W"` decodes
/// to 360, not 0.
pub fn decode_east_longitude(s: &str) -> GridResult<f64> {
    let (value, suffix) =
        split_suffix(s).ok_or_else(|| GridParseError::InvalidLongitude(s.to_string()))?;
    let lon: f64 = value
        .parse()
        .map_err(|_| GridParseError::InvalidLongitude(s.to_string()))?;
    match suffix {
        'E' => Ok(lon),
        'W' => Ok(360.0 - lon),
        _ => Err(GridParseError::InvalidLongitude(s.to_string())),
    }
}

fn split_suffix(s: &str) -> Option<(&str, char)> {
    let s = s.trim();
    let suffix = s.chars().last()?;
    Some((&s[..s.len() - suffix.len_utf8()], suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_latitude() {
        assert_eq!(decode_latitude("45.5N").unwrap(), 45.5);
        assert_eq!(decode_latitude("30S").unwrap(), -30.0);
        assert!(decode_latitude("30").is_err());
        assert!(decode_latitude("").is_err());
        assert!(decode_latitude("N").is_err());
    }

    #[test]
    fn test_decode_east_longitude() {
        assert_eq!(decode_east_longitude("100E").unwrap(), 100.0);
        assert_eq!(decode_east_longitude("100W").unwrap(), 260.0);
        assert_eq!(decode_east_longitude("0W").unwrap(), 360.0);
        assert!(decode_east_longitude("100N").is_err());
    }
}
