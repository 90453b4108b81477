/// Native argument text to UTF-8.
///
/// On Windows arguments arrive as UTF-16; elsewhere they are raw bytes that
/// are expected to already be UTF-8. Either way the result is an owned
/// `String` that lives until it has been written.
use std::ffi::OsStr;

use super::errors::EchoError;

/// Convert UTF-16 code units to UTF-8.
///
/// The exact UTF-8 length is measured first and the buffer is reserved once,
/// so the encoding pass never reallocates.
///
/// Returns `Ok(None)` if `units` contains an unpaired surrogate.
///
/// # Errors
///
/// Returns `EchoError::OutOfMemory` if the buffer cannot be reserved.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn utf16_to_utf8(units: &[u16]) -> Result<Option<String>, EchoError> {
    let Ok(size) = char::decode_utf16(units.iter().copied())
        .map(|c| c.map(char::len_utf8))
        .sum::<Result<usize, _>>()
    else {
        return Ok(None);
    };

    let mut out = String::new();
    out.try_reserve_exact(size)
        .map_err(|_| EchoError::OutOfMemory)?;
    out.extend(char::decode_utf16(units.iter().copied()).map_while(Result::ok));
    debug_assert_eq!(out.len(), size);
    Ok(Some(out))
}

/// Convert one process argument from its native encoding to UTF-8.
///
/// Returns `Ok(None)` when the argument is not valid in its native encoding.
///
/// # Errors
///
/// Returns `EchoError::OutOfMemory` if the buffer cannot be reserved.
#[cfg(windows)]
pub fn native_to_utf8(arg: &OsStr) -> Result<Option<String>, EchoError> {
    use std::os::windows::ffi::OsStrExt;

    let units: Vec<u16> = arg.encode_wide().collect();
    utf16_to_utf8(&units)
}

/// Convert one process argument from its native encoding to UTF-8.
///
/// Returns `Ok(None)` when the argument is not valid in its native encoding.
///
/// # Errors
///
/// Returns `EchoError::OutOfMemory` if the buffer cannot be reserved.
#[cfg(not(windows))]
pub fn native_to_utf8(arg: &OsStr) -> Result<Option<String>, EchoError> {
    let Some(text) = arg.to_str() else {
        return Ok(None);
    };

    let mut out = String::new();
    out.try_reserve_exact(text.len())
        .map_err(|_| EchoError::OutOfMemory)?;
    out.push_str(text);
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_ascii() {
        assert_eq!(utf16_to_utf8(&utf16("hello")).unwrap(), Some("hello".to_owned()));
    }

    #[test]
    fn test_multibyte_is_preserved() {
        for s in ["wörld", "日本語", "😀 emoji", ""] {
            let out = utf16_to_utf8(&utf16(s)).unwrap().unwrap();
            assert_eq!(out, s);
            assert_eq!(out.len(), s.len());
        }
    }

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(
            utf16_to_utf8(&[0xD83D, 0xDE00]).unwrap().as_deref(),
            Some("😀")
        );
    }

    #[test]
    fn test_unpaired_surrogate_is_skipped() {
        assert_eq!(utf16_to_utf8(&[0x0061, 0xD800]).unwrap(), None);
        assert_eq!(utf16_to_utf8(&[0xDC00, 0x0061]).unwrap(), None);
    }

    #[test]
    fn test_native_roundtrip() {
        let out = native_to_utf8(OsStr::new("wörld")).unwrap();
        assert_eq!(out.as_deref(), Some("wörld"));
    }

    #[cfg(unix)]
    #[test]
    fn test_native_invalid_bytes() {
        use std::os::unix::ffi::OsStrExt;

        assert_eq!(native_to_utf8(OsStr::from_bytes(b"ab\xffcd")).unwrap(), None);
    }
}
