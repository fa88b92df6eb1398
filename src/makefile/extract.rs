use crate::makefile::Target;

/// Extracts target declarations from makefile source
///
/// A declaration is a line of the form `name: [deps...] [# description]`,
/// where `name` is made of ASCII letters, digits, underscores and hyphens and
/// starts at the beginning of the line. Spaces around `:` and `#` are
/// optional. An escaped `\#` does not start the description.
///
/// Targets are returned in source order.
pub fn extract_targets(source: &str) -> Vec<Target> {
    source.lines().filter_map(extract_target).collect()
}

fn extract_target(line: &str) -> Option<Target> {
    let re = regex!(r"^([A-Za-z0-9_-]+):((?:\\#|[^#])*)(?:#(.*))?$");
    let captures = re.captures(line)?;

    let name = &captures[1];
    let mut deps = &captures[2];

    // double-colon rule
    if let Some(rest) = deps.strip_prefix(':') {
        deps = rest;
    }
    // `VAR:=value`, `VAR::=value`
    if deps.starts_with('=') {
        return None;
    }

    let target = Target {
        name: name.to_string(),
        description: captures
            .get(3)
            .map(|desc| desc.as_str().trim().to_string())
            .unwrap_or_default(),
        dependencies: deps
            .split_whitespace()
            .map(|dep| dep.replace(r"\#", "#"))
            .collect(),
    };
    log::trace!("found target {:?}", target);

    Some(target)
}
