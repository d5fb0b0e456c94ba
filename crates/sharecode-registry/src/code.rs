//! Share-code generation.

use rand::TryRngCore;
use rand::rngs::OsRng;

use sharecode_core::error::ErrorKind;
use sharecode_core::{AppError, AppResult};

/// Number of decimal digits in a share code.
pub const CODE_LENGTH: usize = 6;

/// Generates a share code of [`CODE_LENGTH`] random decimal digits.
///
/// Each digit comes from an independent byte of OS entropy reduced modulo
/// ten. An entropy-source failure is the only error path; it is never
/// retried against a weaker source.
pub fn generate() -> AppResult<String> {
    let mut bytes = [0u8; CODE_LENGTH];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        AppError::with_source(
            ErrorKind::Entropy,
            "Entropy source failed while generating share code",
            e,
        )
    })?;

    Ok(bytes.iter().map(|b| char::from(b'0' + b % 10)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate().unwrap();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
