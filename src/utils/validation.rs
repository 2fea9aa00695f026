use crate::utils::error::{MarathonError, Result};
use url::Url;

pub const SUPPORTED_PROTOCOLS: [&str; 2] = ["http", "https"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Normalises the protocol to lower case and rejects anything but http/https.
pub fn validate_protocol(field_name: &str, protocol: &str) -> Result<String> {
    let normalized = protocol.trim().to_ascii_lowercase();
    if SUPPORTED_PROTOCOLS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(MarathonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: protocol.to_string(),
            reason: format!(
                "Unsupported protocol. Valid protocols: {}",
                SUPPORTED_PROTOCOLS.join(", ")
            ),
        })
    }
}

/// Parses `host[:port]` as the authority of a base URL.
///
/// Anything beyond an authority (a path, a query, a fragment or credentials)
/// is rejected, as is a location without a host.
pub fn validate_location(field_name: &str, scheme: &str, location: &str) -> Result<Url> {
    let invalid = |reason: String| MarathonError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: location.to_string(),
        reason,
    };

    if location.trim().is_empty() {
        return Err(invalid("Location cannot be empty".to_string()));
    }

    let url = Url::parse(&format!("{}://{}", scheme, location))
        .map_err(|e| invalid(format!("Invalid host authority: {}", e)))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("Location has no host".to_string()));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("Location must be host:port without a path".to_string()));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid(
            "Credentials belong in username/password, not the location".to_string(),
        ));
    }

    Ok(url)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(MarathonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(MarathonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
