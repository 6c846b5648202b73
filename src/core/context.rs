//! Developer-facing contexts in which a match is never user-visible text.
//!
//! All checks look at the text of the same line around the match position.

use std::sync::LazyLock;

use regex::Regex;

static CONSOLE_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"console\.(log|error|warn|info|debug)\s*\(").unwrap());
static THROW_ERROR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"throw\s+new\s+Error\s*\(").unwrap());
static GQL_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"gql\s*`").unwrap());
static REGEXP_CONSTRUCTOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"new\s+RegExp\s*\(").unwrap());
// A `/.../` literal only where an expression can start, so `</b> and <i>` is not one.
static REGEX_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[=(,:!&|?;{\[]\s*)/[^/*\s][^/\n]*/").unwrap());
static JSON_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"JSON\.(stringify|parse)\s*\(").unwrap());
static FORMAT_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.format\s*\(").unwrap());
static STRING_METHOD_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(match|replace|search|split)\s*\(").unwrap());

static ARROW_RETURN_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*\w+\s*=>").unwrap());
static RETURN_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\):\s*\w+").unwrap());
static PROMISE_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Promise\s*<").unwrap());
static TYPED_BINDING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\s*:\s*\w+\s*[=,;]").unwrap());

static OPERATOR_THEN_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(>=|<=|==|!=|===|!==|&&|\|\|)\s*\d+").unwrap());
static NUMBER_THEN_OPERATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*(>=|<=|==|!=|===|!==|&&|\|\|)").unwrap());
static KEYWORD_COMPARISON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(return|const|let|var|if|while|for)\s+.*(>=|<=|==|!=|===|!==)").unwrap()
});
static ARRAY_METHOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(filter|map|reduce|find|some|every)\s*\(").unwrap());

/// Whether a match starting at byte `match_index` of `line` sits in code that
/// never renders text: logging, errors, GraphQL, regexes, JSON, formatting
/// calls, string methods or type annotations.
pub fn is_in_skip_context(line: &str, match_index: usize) -> bool {
    let before = &line[..match_index];

    if CONSOLE_CALL_REGEX.is_match(before)
        || THROW_ERROR_REGEX.is_match(before)
        || GQL_TAG_REGEX.is_match(before)
        || REGEXP_CONSTRUCTOR_REGEX.is_match(before)
        || REGEX_LITERAL_REGEX.is_match(before)
        || JSON_CALL_REGEX.is_match(before)
    {
        return true;
    }

    // Only while still inside the call's parentheses.
    if (FORMAT_CALL_REGEX.is_match(before) || STRING_METHOD_CALL_REGEX.is_match(before))
        && has_unclosed_paren(before)
    {
        return true;
    }

    is_type_annotation(line, before)
}

/// TypeScript annotations such as `(): string =>`, `Promise<void>` or `x: number =`.
///
/// `context` is the line text the annotation is searched in; `before` is the
/// text preceding the match, used to tell JSX (`<`) from type positions.
pub fn is_type_annotation(context: &str, before: &str) -> bool {
    ARROW_RETURN_TYPE_REGEX.is_match(context)
        || RETURN_TYPE_REGEX.is_match(before)
        || PROMISE_TYPE_REGEX.is_match(context)
        || (TYPED_BINDING_REGEX.is_match(context) && !before.contains('<'))
}

/// Whether `text` between `>` and `<` is really a JS expression, e.g.
/// `age >= 18 && age <= 40`.
pub fn looks_like_code(text: &str, before: &str) -> bool {
    OPERATOR_THEN_NUMBER_REGEX.is_match(text)
        || NUMBER_THEN_OPERATOR_REGEX.is_match(text)
        || KEYWORD_COMPARISON_REGEX.is_match(before)
        || ARRAY_METHOD_REGEX.is_match(before)
}

/// Whether a line of multi-line JSX text is really a JS expression.
pub fn looks_like_code_line(text: &str, previous_line: &str) -> bool {
    OPERATOR_THEN_NUMBER_REGEX.is_match(text)
        || NUMBER_THEN_OPERATOR_REGEX.is_match(text)
        || KEYWORD_COMPARISON_REGEX.is_match(previous_line)
}

fn has_unclosed_paren(text: &str) -> bool {
    let open = text.matches('(').count();
    let close = text.matches(')').count();
    open > close
}
