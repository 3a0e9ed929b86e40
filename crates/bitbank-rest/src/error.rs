//! bitbank error codes.

/// Describe a bitbank API error code.
///
/// Only the codes a market buy can plausibly hit are listed.
pub fn describe_error_code(code: i64) -> Option<&'static str> {
    let description = match code {
        10000 => "URL does not exist",
        10001 | 10003 => "system error",
        10002 => "improper JSON format",
        10005 => "timeout error",
        20001 => "API authentication failed",
        20002 => "invalid API key",
        20003 => "API key does not exist",
        20004 => "API nonce does not exist",
        20005 => "API signature does not exist",
        30001 => "order quantity not specified",
        40001 => "invalid order quantity",
        50003 => "account is restricted from this operation",
        50009 => "order does not exist",
        60001 => "insufficient balance",
        60002 => "market buy quantity exceeds the upper limit",
        60011 => "too many open orders",
        70009 => "market orders are temporarily restricted",
        _ => return None,
    };
    Some(description)
}

/// Build the message attached to a rejected request.
pub(crate) fn rejection_message(code: Option<i64>) -> String {
    match code {
        Some(code) => match describe_error_code(code) {
            Some(description) => format!("bitbank error {code}: {description}"),
            None => format!("bitbank error {code}"),
        },
        None => "bitbank reported failure without an error code".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(describe_error_code(60001), Some("insufficient balance"));
        assert_eq!(describe_error_code(20001), Some("API authentication failed"));
        assert_eq!(describe_error_code(12345), None);
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection_message(Some(70009)),
            "bitbank error 70009: market orders are temporarily restricted"
        );
        assert_eq!(rejection_message(Some(99999)), "bitbank error 99999");
        assert!(rejection_message(None).contains("without an error code"));
    }
}
