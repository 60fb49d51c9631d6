//! Text transforms over command arguments

use core_types::CaseTables;

/// Case and concatenation transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// One upper-cased line per argument
    Upcase,
    /// One lower-cased line per argument
    Downcase,
    /// All arguments joined by single spaces, first character of the line upper-cased
    Titlize,
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Upcase => "Upcase",
            Transform::Downcase => "Downcase",
            Transform::Titlize => "Titlize",
        }
    }

    /// Output lines for `args`
    pub fn apply<'a, I>(&self, args: I, cases: &CaseTables) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Transform::Upcase => args
                .into_iter()
                .map(|arg| map_bytes(arg, |b| cases.to_upper(b)))
                .collect(),
            Transform::Downcase => args
                .into_iter()
                .map(|arg| map_bytes(arg, |b| cases.to_lower(b)))
                .collect(),
            Transform::Titlize => vec![titlize(args, cases)],
        }
    }
}

fn map_bytes(text: &str, f: impl Fn(u8) -> u8) -> String {
    text.bytes().map(|b| f(b) as char).collect()
}

/// Joins `args` and upper-cases only the very first character
pub fn titlize<'a, I>(args: I, cases: &CaseTables) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = args.into_iter().collect::<Vec<_>>().join(" ");
    let mut bytes = joined.into_bytes();
    if let Some(first) = bytes.first_mut() {
        *first = cases.to_upper(*first);
    }
    bytes.into_iter().map(char::from).collect()
}
