//! Tokenizer for the batch-transfer text format.
//!
//! A batch is a sequence of blocks: student lines (`name words... group`)
//! followed by one marker line (`- Course Name`) naming the target course
//! for everything above it. The literal instruction `TODO` clears every
//! assignment in the catalog instead.

/// One line inside a block, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLine {
    Student { name: String, group: String },
    Malformed(String),
}

/// Student lines grouped under their target-course marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub course: String,
    pub lines: Vec<BlockLine>,
}

/// A fully tokenized transfer request. `dangling` holds student lines that
/// were never closed by a course marker; they are reported back instead of
/// being silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferBatch {
    pub blocks: Vec<Block>,
    pub dangling: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchInstruction {
    /// The whole-catalog clear, triggered by the literal `TODO`.
    ClearAll,
    Transfer(TransferBatch),
}

/// A student line needs at least one name word plus the group token.
pub(crate) fn parse_student_line(line: &str) -> BlockLine {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return BlockLine::Malformed(line.to_string());
    }
    BlockLine::Student {
        name: parts[..parts.len() - 1].join(" "),
        group: parts[parts.len() - 1].to_string(),
    }
}

pub fn parse_batch(text: &str) -> BatchInstruction {
    if text.trim() == "TODO" {
        return BatchInstruction::ClearAll;
    }

    let mut batch = TransferBatch::default();
    let mut pending: Vec<BlockLine> = Vec::new();
    let mut pending_raw: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(course) = line.strip_prefix('-') {
            pending_raw.clear();
            batch.blocks.push(Block {
                course: course.trim().to_string(),
                lines: std::mem::take(&mut pending),
            });
        } else {
            pending.push(parse_student_line(line));
            pending_raw.push(line.to_string());
        }
    }
    batch.dangling = pending_raw;
    BatchInstruction::Transfer(batch)
}
