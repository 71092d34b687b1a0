//! Canonical forms for the noisy free-text fields of the source sheets.
//!
//! [`format_phone`] doubles as the validity gate for the whole pipeline: an
//! empty result means the phone is unusable and the row carrying it is
//! dropped downstream. [`format_document`] never rejects; a document that
//! fits neither the CNPJ nor the CPF shape degrades to its raw digits.

/// Strips every character that is not an ASCII digit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Trims and lower-cases a company name for matching.
pub fn normalize_company(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Formats a tax document as `NN.NNN.NNN/NNNN-NN` (CNPJ, 14 digits) or
/// `NNN.NNN.NNN-NN` (CPF, 11 digits). Any other non-empty digit count is
/// returned unformatted; blank input yields an empty string.
pub fn format_document(raw: &str) -> String {
    let digits = digits_only(raw);
    match digits.len() {
        14 => format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        ),
        11 => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        _ => digits,
    }
}

/// Formats a Brazilian phone number as `(NN)NNNNN-NNNN` (mobile, 11 digits)
/// or `(NN)NNNN-NNNN` (landline, 10 digits). A 13-digit number starting
/// with the `55` country code is reduced to its local part first.
///
/// Returns an empty string for anything else, including placeholder
/// sequences where every digit is identical. An empty result marks the
/// phone invalid.
pub fn format_phone(raw: &str) -> String {
    let mut digits = digits_only(raw);

    let mut chars = digits.chars();
    if let Some(first) = chars.next() {
        if chars.all(|ch| ch == first) {
            return String::new();
        }
    }

    if digits.len() == 13 && digits.starts_with("55") {
        digits.drain(..2);
    }

    match digits.len() {
        11 => format!("({}){}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}){}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{digits_only, format_document, format_phone, normalize_company};

    #[test]
    fn digits_only_strips_punctuation() {
        assert_eq!(digits_only("12.345.678/0001-95"), "12345678000195");
        assert_eq!(digits_only("  "), "");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn normalize_company_trims_and_lowercases() {
        assert_eq!(normalize_company("  Acme LTDA "), "acme ltda");
        assert_eq!(normalize_company("   "), "");
    }

    #[test]
    fn format_document_handles_cnpj_and_cpf() {
        assert_eq!(format_document("12345678000195"), "12.345.678/0001-95");
        assert_eq!(format_document("12345678901"), "123.456.789-01");
    }

    #[test]
    fn format_document_degrades_to_raw_digits() {
        assert_eq!(format_document("123"), "123");
        assert_eq!(format_document(""), "");
        assert_eq!(format_document("n/a"), "");
    }

    #[test]
    fn format_phone_formats_mobile_and_landline() {
        assert_eq!(format_phone("11987654321"), "(11)98765-4321");
        assert_eq!(format_phone("1133334444"), "(11)3333-4444");
        assert_eq!(format_phone("11 98765-4321"), "(11)98765-4321");
    }

    #[test]
    fn format_phone_strips_country_code() {
        assert_eq!(format_phone("5511987654321"), "(11)98765-4321");
    }

    #[test]
    fn format_phone_rejects_repeated_digit_placeholders() {
        assert_eq!(format_phone("1111111111"), "");
        assert_eq!(format_phone("99999999999"), "");
    }

    #[test]
    fn format_phone_rejects_unusable_lengths() {
        assert_eq!(format_phone("12345"), "");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("sem telefone"), "");
    }
}
