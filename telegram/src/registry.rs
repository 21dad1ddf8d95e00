// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Static discriminator tables, one per union family.

use crate::schema::Shape;
use std::{collections::HashMap, sync::OnceLock};

/// What the decoder does with a discriminator value the family doesn't know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownTag {
  /// Fail with `UnknownDiscriminator`.
  Reject,
  /// Keep the tag and the raw fields in the family's unknown variant.
  Preserve,
}

#[derive(Debug)]
pub struct Entry {
  pub tag: &'static str,
  pub shape: fn() -> &'static Shape,
}

#[derive(Debug)]
pub struct Family {
  pub name: &'static str,
  pub discriminator: &'static str,
  /// Fields every shape of the family starts with, in this order.
  pub base: &'static [&'static str],
  pub entries: &'static [Entry],
  pub unknown: UnknownTag,
  index: OnceLock<Index>,
}

#[derive(Debug, Default)]
struct Index {
  by_tag: HashMap<&'static str, usize>,
  by_shape: HashMap<&'static str, usize>,
}

impl Family {
  pub const fn new(
    name: &'static str,
    discriminator: &'static str,
    base: &'static [&'static str],
    entries: &'static [Entry],
    unknown: UnknownTag,
  ) -> Self {
    Self {
      name,
      discriminator,
      base,
      entries,
      unknown,
      index: OnceLock::new(),
    }
  }

  fn index(&self) -> &Index {
    self.index.get_or_init(|| {
      let mut index = Index::default();
      for (position, entry) in self.entries.iter().enumerate() {
        let previous = index.by_tag.insert(entry.tag, position);
        debug_assert!(previous.is_none(), "{}: duplicate tag {}", self.name, entry.tag);
        let shape = (entry.shape)();
        debug_assert!(
          self.starts_with_base(shape),
          "{}: shape {} does not start with base fields {:?}",
          self.name,
          shape.name,
          self.base
        );
        index.by_shape.insert(shape.name, position);
      }
      index
    })
  }

  /// Whether `shape` declares the family's base fields first.
  pub fn starts_with_base(&self, shape: &Shape) -> bool {
    shape.fields.len() >= self.base.len()
      && shape
        .fields
        .iter()
        .zip(self.base)
        .all(|(field, base)| field.name == *base)
  }

  pub fn resolve_by_tag(&self, tag: &str) -> Option<&'static Shape> {
    self
      .index()
      .by_tag
      .get(tag)
      .map(|&position| (self.entries[position].shape)())
  }

  pub fn resolve_by_shape(&self, shape: &Shape) -> Option<&'static str> {
    self
      .index()
      .by_shape
      .get(shape.name)
      .map(|&position| self.entries[position].tag)
  }

  pub fn tags(&self) -> impl Iterator<Item = &'static str> {
    self.entries.iter().map(|entry| entry.tag)
  }
}
