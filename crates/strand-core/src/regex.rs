//! Anchored regular-expression matcher.

use std::borrow::Cow;

use regex_automata::meta::{self, BuildError};
use regex_automata::{Anchored, Input};
use serde::Serialize;

use crate::{ByteStream, Context, PResult, Parser};

/// Matches a regular expression starting exactly at the cursor.
///
/// The pattern is never searched for further ahead: `\s+` fails on `"abc  "`.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    re: meta::Regex,
}

/// Text of a successful match and its capture groups `1..n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub text: String,
    /// `None` for groups that did not participate in the match.
    pub groups: Vec<Option<String>>,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, BuildError> {
        Ok(Self {
            pattern: pattern.to_string(),
            re: meta::Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl<'a> Parser<ByteStream<'a>> for Regex {
    type Output = Match;

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Regex(/{}/)", self.pattern))
    }

    fn parse(&self, ctx: &mut Context<'_, ByteStream<'a>>) -> PResult<Match> {
        let hay = ctx.stream().remaining();
        let input = Input::new(hay).anchored(Anchored::Yes);
        let mut caps = self.re.create_captures();
        self.re.search_captures(&input, &mut caps);

        let Some(found) = caps.get_match() else {
            return Err(ctx.unexpected(format!("match for /{}/", self.pattern)));
        };

        let text = String::from_utf8_lossy(&hay[found.range()]).into_owned();
        let groups = (1..caps.group_len())
            .map(|i| {
                caps.get_group(i)
                    .map(|span| String::from_utf8_lossy(&hay[span.range()]).into_owned())
            })
            .collect();

        ctx.advance_by(found.len());
        Ok(Match { text, groups })
    }
}
