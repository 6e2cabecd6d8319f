//! RFC 6570 URI template expansion, limited to the forms Graph uses.
//!
//! Supported expressions:
//! - `{var}` simple expansion, everything but unreserved characters encoded
//! - `{+var}` reserved expansion, reserved characters and `%` pass through
//! - `{?a,b}` form-style query, `{&a}` query continuation
//!
//! Variable names may contain pct-encoded triplets (`%24top`,
//! `managedDevice%2Did`). They are matched and emitted exactly as written.
//! List values are comma-joined without explode. Undefined variables and
//! empty lists produce nothing.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{GraphError, Result};

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const RESERVED: &AsciiSet = &UNRESERVED
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b'%');

/// A value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    /// A single string.
    Str(String),
    /// A list, rendered comma-separated.
    List(Vec<String>),
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Str(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Str(value)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        TemplateValue::List(value)
    }
}

/// Template variables keyed by their name as written in the template.
pub type Variables = BTreeMap<String, TemplateValue>;

#[derive(Clone, Copy)]
enum Operator {
    Simple,
    Reserved,
    Query,
    QueryContinuation,
}

impl Operator {
    fn parse(expr: &str) -> (Operator, &str) {
        match expr.as_bytes().first() {
            Some(b'+') => (Operator::Reserved, &expr[1..]),
            Some(b'?') => (Operator::Query, &expr[1..]),
            Some(b'&') => (Operator::QueryContinuation, &expr[1..]),
            _ => (Operator::Simple, expr),
        }
    }

    fn encode_set(self) -> &'static AsciiSet {
        match self {
            Operator::Reserved => RESERVED,
            _ => UNRESERVED,
        }
    }
}

/// Expands `template` against `vars`.
///
/// Fails with [`GraphError::InvalidRequest`] on an unterminated or empty
/// expression.
pub fn expand(template: &str, vars: &Variables) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            GraphError::InvalidRequest(format!(
                "unterminated expression in URL template: {template}"
            ))
        })?;
        expand_expression(&after[..close], vars, &mut out, template)?;
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

fn expand_expression(expr: &str, vars: &Variables, out: &mut String, template: &str) -> Result<()> {
    let (op, names) = Operator::parse(expr);
    if names.is_empty() {
        return Err(GraphError::InvalidRequest(format!(
            "empty expression in URL template: {template}"
        )));
    }

    let mut first = true;
    for name in names.split(',') {
        // Explode modifiers are accepted but lists are never exploded.
        let name = name.trim_end_matches('*');
        if name.is_empty() {
            return Err(GraphError::InvalidRequest(format!(
                "empty variable name in URL template: {template}"
            )));
        }
        let Some(value) = vars.get(name).and_then(|v| render(v, op.encode_set())) else {
            continue;
        };

        match op {
            Operator::Simple | Operator::Reserved => {
                if !first {
                    out.push(',');
                }
                out.push_str(&value);
            }
            Operator::Query | Operator::QueryContinuation => {
                let sep = match (op, first) {
                    (Operator::Query, true) => '?',
                    _ => '&',
                };
                out.push(sep);
                out.push_str(name);
                out.push('=');
                out.push_str(&value);
            }
        }
        first = false;
    }

    Ok(())
}

fn render(value: &TemplateValue, set: &'static AsciiSet) -> Option<String> {
    match value {
        TemplateValue::Str(s) => Some(utf8_percent_encode(s, set).to_string()),
        TemplateValue::List(items) if items.is_empty() => None,
        TemplateValue::List(items) => Some(
            items
                .iter()
                .map(|item| utf8_percent_encode(item, set).to_string())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, TemplateValue)]) -> Variables {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn reserved_expansion_keeps_base_url_intact() {
        let v = vars(&[("baseurl", "https://graph.microsoft.com/v1.0".into())]);
        let url = expand("{+baseurl}/deviceManagement", &v).unwrap();
        assert_eq!(url, "https://graph.microsoft.com/v1.0/deviceManagement");
    }

    #[test]
    fn simple_expansion_encodes_reserved_characters() {
        let v = vars(&[("managedDevice%2Did", "a/b c".into())]);
        let url = expand("/managedDevices/{managedDevice%2Did}", &v).unwrap();
        assert_eq!(url, "/managedDevices/a%2Fb%20c");
    }

    #[test]
    fn query_expansion_skips_undefined_variables() {
        let v = vars(&[
            ("%24top", "5".into()),
            ("%24filter", "operatingSystem eq 'iOS'".into()),
        ]);
        let url = expand(
            "/managedDevices{?%24count,%24filter,%24select,%24top}",
            &v,
        )
        .unwrap();
        assert_eq!(
            url,
            "/managedDevices?%24filter=operatingSystem%20eq%20%27iOS%27&%24top=5"
        );
    }

    #[test]
    fn list_values_are_comma_joined() {
        let v = vars(&[(
            "%24select",
            vec!["id".to_string(), "deviceName".to_string()].into(),
        )]);
        let url = expand("/x{?%24select}", &v).unwrap();
        assert_eq!(url, "/x?%24select=id,deviceName");
    }

    #[test]
    fn empty_list_is_skipped() {
        let v = vars(&[("%24select", TemplateValue::List(Vec::new()))]);
        assert_eq!(expand("/x{?%24select}", &v).unwrap(), "/x");
    }

    #[test]
    fn query_continuation_uses_ampersand() {
        let v = vars(&[("a", "1".into()), ("b", "2".into())]);
        assert_eq!(expand("/x?fixed=0{&a,b}", &v).unwrap(), "/x?fixed=0&a=1&b=2");
    }

    #[test]
    fn function_parameter_in_literal_quotes() {
        let v = vars(&[("secretReferenceValueId", "ref-1".into())]);
        let url = expand(
            "/getOmaSettingPlainTextValue(secretReferenceValueId='{secretReferenceValueId}')",
            &v,
        )
        .unwrap();
        assert_eq!(
            url,
            "/getOmaSettingPlainTextValue(secretReferenceValueId='ref-1')"
        );
    }

    #[test]
    fn unterminated_expression_is_rejected() {
        let err = expand("{+baseurl/deviceManagement", &Variables::new()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidRequest(_)));
    }

    #[test]
    fn empty_expression_is_rejected() {
        let err = expand("/x{}", &Variables::new()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidRequest(_)));
    }
}
