//! Code block language detection.
//!
//! Detection is a keyword score: every language has a list of tell-tale
//! tokens, each hit adds its weight, and the best score wins. No hits, or a
//! tie at the top, is plain text.

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;

/// Languages the highlighter is asked to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    C,
    JavaScript,
    Python,
    Java,
    Plaintext,
}

impl CodeLanguage {
    /// Label stored on the code block and handed to the highlighter.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Java => "Java",
            Self::Plaintext => "plaintext",
        }
    }

    /// Inverse of [`label`](Self::label), case-insensitive. Unknown labels
    /// read as plain text.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "c" | "c++" | "cpp" => Self::C,
            "javascript" | "js" => Self::JavaScript,
            "python" | "py" => Self::Python,
            "java" => Self::Java,
            _ => Self::Plaintext,
        }
    }
}

struct Rule {
    token: &'static str,
    weight: u32,
}

const fn rule(token: &'static str, weight: u32) -> Rule {
    Rule { token, weight }
}

const C_RULES: &[Rule] = &[
    rule("#include", 3),
    rule("printf(", 2),
    rule("int main(", 3),
    rule("std::", 3),
    rule("malloc(", 2),
    rule("->", 1),
    rule("cout <<", 3),
    rule("#define", 2),
    rule("unsigned ", 1),
];

const JS_RULES: &[Rule] = &[
    rule("function ", 2),
    rule("console.log(", 3),
    rule("const ", 1),
    rule("let ", 1),
    rule("var ", 1),
    rule("=>", 2),
    rule("===", 2),
    rule("!==", 2),
    rule("document.", 2),
    rule("require(", 2),
    rule("undefined", 1),
];

const PYTHON_RULES: &[Rule] = &[
    rule("def ", 3),
    rule("elif ", 3),
    rule("print(", 1),
    rule("self.", 1),
    rule("None", 1),
    rule("True", 1),
    rule("False", 1),
    rule("lambda ", 2),
    rule("__init__", 3),
    rule("from ", 1),
];

const JAVA_RULES: &[Rule] = &[
    rule("public class ", 4),
    rule("System.out.println(", 4),
    rule("public static void main", 4),
    rule("private ", 1),
    rule("String[]", 2),
    rule("new ", 1),
    rule("@Override", 3),
    rule("import java.", 4),
];

fn score(source: &str, rules: &[Rule]) -> u32 {
    rules
        .iter()
        .map(|r| u32::try_from(source.matches(r.token).count()).unwrap_or(u32::MAX).saturating_mul(r.weight))
        .fold(0, u32::saturating_add)
}

/// Guess the language of a code snippet.
#[must_use]
pub fn detect_language(source: &str) -> CodeLanguage {
    let mut scores = [
        (CodeLanguage::C, score(source, C_RULES)),
        (CodeLanguage::JavaScript, score(source, JS_RULES)),
        (CodeLanguage::Python, score(source, PYTHON_RULES)),
        (CodeLanguage::Java, score(source, JAVA_RULES)),
    ];
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    let (best, best_score) = scores[0];
    if best_score == 0 || scores[1].1 == best_score {
        return CodeLanguage::Plaintext;
    }
    best
}
