/// A request target split into its route key and argument.
///
/// `/files/a/b.txt` decomposes into primary `files` and secondary `a/b.txt`.
/// The empty token produced by the leading `/` is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    pub primary: &'a str,
    pub secondary: &'a str,
}

impl<'a> PathSegments<'a> {
    pub fn parse(target: &'a str) -> Self {
        let rest = target.strip_prefix('/').unwrap_or(target);

        match rest.split_once('/') {
            Some((primary, secondary)) => Self { primary, secondary },
            None => Self {
                primary: rest,
                secondary: "",
            },
        }
    }
}
