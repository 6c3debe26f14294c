//! Gallery page state: category filters, grouping and lightbox navigation.

use crate::models::{GalleryImage, ItemId};

/// Filter entry that matches every image.
pub const ALL: &str = "All";

/// `"All"` followed by the distinct categories, in order of first appearance.
pub fn categories(images: &[GalleryImage]) -> Vec<String> {
    let mut names = vec![ALL.to_string()];
    for image in images {
        if !names.contains(&image.category) {
            names.push(image.category.clone());
        }
    }
    names
}

/// Images grouped by category, groups in order of first appearance.
pub fn group_by_category(images: &[GalleryImage]) -> Vec<(String, Vec<GalleryImage>)> {
    let mut groups: Vec<(String, Vec<GalleryImage>)> = Vec::new();
    for image in images {
        match groups.iter_mut().find(|(name, _)| *name == image.category) {
            Some((_, items)) => items.push(image.clone()),
            None => groups.push((image.category.clone(), vec![image.clone()])),
        }
    }
    groups
}

/// Active category filters.
///
/// Either exactly `["All"]` or a non-empty set of category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    active: Vec<String>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            active: vec![ALL.to_string()],
        }
    }
}

impl CategoryFilter {
    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn is_all(&self) -> bool {
        self.active.iter().any(|f| f == ALL)
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active.iter().any(|f| f == category)
    }

    /// Toggle a category. Selecting `"All"` resets; removing the last
    /// category falls back to `"All"`.
    pub fn toggle(&mut self, category: &str) {
        if category == ALL {
            *self = Self::default();
            return;
        }
        self.active.retain(|f| f != ALL);
        if let Some(pos) = self.active.iter().position(|f| f == category) {
            self.active.remove(pos);
        } else {
            self.active.push(category.to_string());
        }
        if self.active.is_empty() {
            *self = Self::default();
        }
    }

    /// Drop filters for categories that no longer exist.
    pub fn retain_known(&mut self, known: &[String]) {
        if self.is_all() {
            return;
        }
        self.active.retain(|f| known.contains(f));
        if self.active.is_empty() {
            *self = Self::default();
        }
    }

    pub fn matches(&self, image: &GalleryImage) -> bool {
        self.is_all() || self.is_active(&image.category)
    }

    /// Images passing the filter, in input order.
    pub fn apply(&self, images: &[GalleryImage]) -> Vec<GalleryImage> {
        images
            .iter()
            .filter(|img| self.matches(img))
            .cloned()
            .collect()
    }
}

/// Lightbox step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// Image after (or before) `current`, wrapping around.
///
/// `None` when the list is empty or `current` is not in it.
pub fn step<'a>(images: &'a [GalleryImage], current: &ItemId, step: Step) -> Option<&'a GalleryImage> {
    let len = images.len();
    let index = images.iter().position(|img| &img.id == current)?;
    let target = match step {
        Step::Next => (index + 1) % len,
        Step::Prev => (index + len - 1) % len,
    };
    images.get(target)
}
