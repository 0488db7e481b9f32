//! Fixed-vocabulary lexer for the informal annotation channel embedded in
//! free-text descriptions: `-TypeName`, `-ErrType`, and `-StatusCode`
//! keywords, each paired with the following whitespace token.

use crate::naming;

pub const KW_TYPE_NAME: &str = "-TypeName";
pub const KW_ERR_TYPE: &str = "-ErrType";
pub const KW_STATUS_CODE: &str = "-StatusCode";

/// Marker token marking an error type as unnamed at its use site.
pub const AD_HOC: &str = "ad-hoc";

/// Argument of an `-ErrType` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrTypeArg {
    /// A stable, shared error type name.
    Named(String),
    /// `ad-hoc`, optionally followed by a literal name token.
    AdHoc(Option<String>),
}

/// Argument of a `-StatusCode` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusArg {
    Code(u16),
    /// Non-numeric or out-of-range token, kept verbatim for diagnostics.
    Invalid(String),
}

/// All directives lexed out of one description. First match per kind
/// wins; keywords without a trailing argument land in `malformed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directives {
    pub type_name: Option<String>,
    pub err_type: Option<ErrTypeArg>,
    pub status_code: Option<StatusArg>,
    pub malformed: Vec<&'static str>,
}

impl Directives {
    pub fn is_empty(&self) -> bool {
        self.type_name.is_none() && self.err_type.is_none() && self.status_code.is_none()
    }
}

fn is_keyword(token: &str) -> bool {
    matches!(token, KW_TYPE_NAME | KW_ERR_TYPE | KW_STATUS_CODE)
}

/// Lex the directives out of a description. Tokenization is plain
/// whitespace splitting; anything that is not a recognized keyword or a
/// keyword argument is prose and skipped.
pub fn lex(text: &str) -> Directives {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out = Directives::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            KW_TYPE_NAME => match tokens.get(i + 1) {
                Some(arg) if !is_keyword(arg) => {
                    if out.type_name.is_none() {
                        out.type_name = Some(naming::first_upper(arg));
                    }
                    i += 1;
                }
                _ => out.malformed.push(KW_TYPE_NAME),
            },
            KW_ERR_TYPE => match tokens.get(i + 1) {
                Some(&AD_HOC) => {
                    // ad-hoc may carry a literal name right after it
                    let name = tokens
                        .get(i + 2)
                        .filter(|t| !is_keyword(t))
                        .map(|t| naming::first_upper(t));
                    let consumed = if name.is_some() { 2 } else { 1 };
                    if out.err_type.is_none() {
                        out.err_type = Some(ErrTypeArg::AdHoc(name));
                    }
                    i += consumed;
                }
                Some(arg) if !is_keyword(arg) => {
                    if out.err_type.is_none() {
                        out.err_type = Some(ErrTypeArg::Named(naming::first_upper(arg)));
                    }
                    i += 1;
                }
                _ => out.malformed.push(KW_ERR_TYPE),
            },
            KW_STATUS_CODE => match tokens.get(i + 1) {
                Some(arg) if !is_keyword(arg) => {
                    if out.status_code.is_none() {
                        out.status_code = Some(parse_status(arg));
                    }
                    i += 1;
                }
                _ => out.malformed.push(KW_STATUS_CODE),
            },
            _ => {}
        }
        i += 1;
    }

    out
}

fn parse_status(token: &str) -> StatusArg {
    match token.parse::<u16>() {
        Ok(code) if (100..=599).contains(&code) => StatusArg::Code(code),
        _ => StatusArg::Invalid(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        let d = lex("The list of jobs -TypeName jobList trailing");
        assert_eq!(d.type_name.as_deref(), Some("JobList"));
        assert!(d.err_type.is_none());
        assert!(d.malformed.is_empty());
    }

    #[test]
    fn test_named_err_type() {
        let d = lex("-ErrType notFound -StatusCode 404");
        assert_eq!(d.err_type, Some(ErrTypeArg::Named("NotFound".to_string())));
        assert_eq!(d.status_code, Some(StatusArg::Code(404)));
    }

    #[test]
    fn test_ad_hoc_with_literal_name() {
        let d = lex("-ErrType ad-hoc NotFound -StatusCode 404");
        assert_eq!(
            d.err_type,
            Some(ErrTypeArg::AdHoc(Some("NotFound".to_string())))
        );
        assert_eq!(d.status_code, Some(StatusArg::Code(404)));
    }

    #[test]
    fn test_ad_hoc_without_name() {
        let d = lex("-ErrType ad-hoc -StatusCode 500");
        assert_eq!(d.err_type, Some(ErrTypeArg::AdHoc(None)));
        assert_eq!(d.status_code, Some(StatusArg::Code(500)));
    }

    #[test]
    fn test_first_match_wins() {
        let d = lex("-TypeName first -TypeName second");
        assert_eq!(d.type_name.as_deref(), Some("First"));
    }

    #[test]
    fn test_malformed_trailing_keyword() {
        let d = lex("a fine description -TypeName");
        assert!(d.type_name.is_none());
        assert_eq!(d.malformed, vec![KW_TYPE_NAME]);
    }

    #[test]
    fn test_non_numeric_status() {
        let d = lex("-StatusCode notanumber");
        assert_eq!(
            d.status_code,
            Some(StatusArg::Invalid("notanumber".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_status() {
        let d = lex("-StatusCode 42");
        assert_eq!(d.status_code, Some(StatusArg::Invalid("42".to_string())));
    }

    #[test]
    fn test_prose_only() {
        assert!(lex("no directives here at all").is_empty());
    }
}
