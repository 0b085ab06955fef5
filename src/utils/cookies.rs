/// Busca una cookie por nombre exacto en `document.cookie` y decodifica su valor
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            urlencoding::decode(value.trim())
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.trim().to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_name_only() {
        let header = "sessionid=abc; xcsrftoken=nope; csrftoken=T0k3n";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("T0k3n"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(
            cookie_value("csrftoken=a%2Bb%3D", "csrftoken").as_deref(),
            Some("a+b=")
        );
    }

    #[test]
    fn empty_header_has_no_cookies() {
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
