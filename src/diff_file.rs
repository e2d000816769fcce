use std::fmt;

/// One file's change set, as described by a `---`/`+++` header pair and the
/// hunks that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub old_file: String,
    pub new_file: String,
    pub hunks: Vec<Hunk>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub old_start: u32,
    pub old_count: u32,
    pub new_start: u32,
    pub new_count: u32,
    /// Text after the closing `@@`, e.g. a function signature.
    pub context: Option<String>,
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
}

/// A single line of a hunk. Each variant only carries the line numbers that
/// exist for it: removed lines have no new-side number, added lines no
/// old-side number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Unchanged {
        content: String,
        old_line: u32,
        new_line: u32,
    },
    Added {
        content: String,
        new_line: u32,
    },
    Removed {
        content: String,
        old_line: u32,
    },
}

impl FileDiff {
    pub fn new(old_file: &str, new_file: &str) -> Self {
        Self {
            old_file: old_file.to_string(),
            new_file: new_file.to_string(),
            hunks: Vec::new(),
        }
    }

    pub fn changes(&self) -> impl Iterator<Item = &Change> {
        self.hunks.iter().flat_map(|hunk| hunk.changes.iter())
    }

    pub fn added_count(&self) -> usize {
        self.changes()
            .filter(|c| c.kind() == ChangeKind::Added)
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.changes()
            .filter(|c| c.kind() == ChangeKind::Removed)
            .count()
    }
}

impl Hunk {
    pub fn new(old_start: u32, old_count: u32, new_start: u32, new_count: u32) -> Self {
        Self {
            old_start,
            old_count,
            new_start,
            new_count,
            context: None,
            changes: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: &str) -> Self {
        self.context = (!context.is_empty()).then(|| context.to_string());
        self
    }
}

/// Re-serializes the hunk header, always with explicit counts.
impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_count, self.new_start, self.new_count
        )?;
        if let Some(context) = &self.context {
            write!(f, " {context}")?;
        }
        Ok(())
    }
}

impl ChangeKind {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            ChangeKind::Unchanged => None,
            ChangeKind::Added => Some("added"),
            ChangeKind::Removed => Some("removed"),
        }
    }
}

impl Change {
    pub fn new_unchanged(content: &str, old_line: u32, new_line: u32) -> Self {
        Change::Unchanged {
            content: content.to_string(),
            old_line,
            new_line,
        }
    }

    pub fn new_added(content: &str, new_line: u32) -> Self {
        Change::Added {
            content: content.to_string(),
            new_line,
        }
    }

    pub fn new_removed(content: &str, old_line: u32) -> Self {
        Change::Removed {
            content: content.to_string(),
            old_line,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Unchanged { .. } => ChangeKind::Unchanged,
            Change::Added { .. } => ChangeKind::Added,
            Change::Removed { .. } => ChangeKind::Removed,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Change::Unchanged { content, .. }
            | Change::Added { content, .. }
            | Change::Removed { content, .. } => content,
        }
    }

    pub fn old_line(&self) -> Option<u32> {
        match self {
            Change::Unchanged { old_line, .. } | Change::Removed { old_line, .. } => Some(*old_line),
            Change::Added { .. } => None,
        }
    }

    pub fn new_line(&self) -> Option<u32> {
        match self {
            Change::Unchanged { new_line, .. } | Change::Added { new_line, .. } => Some(*new_line),
            Change::Removed { .. } => None,
        }
    }

    /// The number shown in the gutter: new side, except for removed lines.
    pub fn display_line(&self) -> u32 {
        match self {
            Change::Unchanged { new_line, .. } | Change::Added { new_line, .. } => *new_line,
            Change::Removed { old_line, .. } => *old_line,
        }
    }
}
