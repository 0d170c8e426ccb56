/// One display line of an assistant reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyLine {
    /// A line wholly wrapped in `**`, shown bold without the markers.
    Emphasis(String),
    Plain(String),
}

pub fn reply_lines(content: &str) -> Vec<ReplyLine> {
    content.split('\n').map(classify_line).collect()
}

fn classify_line(line: &str) -> ReplyLine {
    if !(line.starts_with("**") && line.ends_with("**")) {
        return ReplyLine::Plain(line.to_string());
    }
    // The markers may overlap ("**", "***"); what sits between them is then empty.
    let inner = line.get(2..line.len().saturating_sub(2)).unwrap_or_default();
    ReplyLine::Emphasis(inner.to_string())
}
