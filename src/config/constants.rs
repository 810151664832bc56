//! Fixed endpoint and protocol constants for the Etherscan gas oracle

/// Base URL of the Etherscan API
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Query parameters selecting the gas-oracle action
pub const GAS_ORACLE_QUERY: [(&str, &str); 2] = [("module", "gastracker"), ("action", "gasoracle")];

/// Name of the query parameter carrying the credential
pub const API_KEY_PARAM: &str = "apikey";

/// Value of the envelope's `status` field on success
pub const STATUS_OK: &str = "1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_parses() {
        let url = url::Url::parse(ETHERSCAN_API_URL).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.etherscan.io"));
    }
}
