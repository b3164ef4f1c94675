/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use email_address::EmailAddress;
use std::str::FromStr;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn validate_month(month: i16) -> Result<i16, String> {
    if MONTH_RANGE.contains(&month) {
        Ok(month)
    } else {
        Err("Please enter a month number from 1-12".to_string())
    }
}

pub fn validate_year(year: i16) -> Result<i16, String> {
    if YEAR_RANGE.contains(&year) {
        Ok(year)
    } else {
        Err(format!(
            "Please enter a year between {} and {}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        ))
    }
}

pub fn validate_link(link: &str) -> Result<(), String> {
    if link.len() > MAX_LINK_LENGTH {
        return Err(format!(
            "Links cannot be longer than {} characters",
            MAX_LINK_LENGTH
        ));
    }

    if !(link.starts_with("http://") || link.starts_with("https://")) {
        return Err("Links must start with http:// or https://".to_string());
    }

    Ok(())
}

/// Lowercases and trims an address, rejecting anything that is not a
/// well-formed email.
pub fn normalize_email(email: &str) -> Result<String, String> {
    let email = email.trim().to_lowercase();

    EmailAddress::from_str(&email).map_err(|_| "Please enter a valid email address".to_string())?;

    Ok(email)
}

/// Checks a normalized address against the comma-separated allow-list.
/// Subdomains of an allowed domain are accepted, so `dwp.gov.uk`
/// addresses pass when `gov.uk` is listed.
pub fn email_domain_allowed(email: &str, allowed_domains: &str) -> bool {
    let domain = match email.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => return false,
    };

    allowed_domains
        .split(',')
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .any(|allowed| domain == allowed || domain.ends_with(&format!(".{}", allowed)))
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}
