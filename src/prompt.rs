//! A rendered prompt.

use std::fmt;
use std::io::Write;

use crate::fragment::Fragment;

/// Resolved fragments in catalog order.
///
/// Owned fragments are released when the prompt is dropped; borrowed ones never are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    fragments: Vec<Fragment>,
}

impl Prompt {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments holding an allocation.
    pub fn owned_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_owned()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| f.is_failed())
    }

    /// The prompt as a single newline-terminated line.
    pub fn line(&self) -> String {
        let len = self.fragments.iter().map(|f| f.as_str().len()).sum::<usize>() + 1;
        let mut line = String::with_capacity(len);
        for fragment in &self.fragments {
            line.push_str(fragment.as_str());
        }
        line.push('\n');
        line
    }

    /// Writes [`Prompt::line`] and flushes.
    pub fn write_to<W: Write>(&self, mut out: W) -> crate::Result<()> {
        out.write_all(self.line().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl FromIterator<Fragment> for Prompt {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Prompt {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Prompt {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.as_str())?;
        }
        Ok(())
    }
}
