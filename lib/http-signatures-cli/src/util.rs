use owo_colors::{OwoColorize, Stream};
use std::{
    fmt::Display,
    io::{self, Write},
};

#[inline]
pub fn error_kaomoji() -> impl Display {
    "(┬┬﹏┬┬)".if_supports_color(Stream::Stdout, |text| text.red())
}

#[inline]
pub fn success_kaomoji() -> impl Display {
    "(^///^)".if_supports_color(Stream::Stdout, |text| text.green())
}

/// Report a successful check
pub fn success<W>(sink: &mut W, message: impl Display) -> io::Result<()>
where
    W: Write,
{
    writeln!(sink, "✅ {message} {}", success_kaomoji())
}

/// Split a `name: value` header argument
pub fn split_header(header: &str) -> Option<(&str, &str)> {
    let (name, value) = header.split_once(':')?;
    let name = name.trim();

    (!name.is_empty()).then(|| (name, value.trim()))
}

#[cfg(test)]
mod test {
    use super::split_header;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_arguments() {
        assert_eq!(
            split_header("Origin-Date: 2021-04-20T20:21:15Z"),
            Some(("Origin-Date", "2021-04-20T20:21:15Z"))
        );
        assert_eq!(
            split_header(r#"signature:indexed="?0;signify="0B"#),
            Some(("signature", r#"indexed="?0;signify="0B"#))
        );
        assert_eq!(split_header("no separator"), None);
        assert_eq!(split_header(": value"), None);
    }
}
