//! Vertex satellite data
//!
//! A fixed number of integer fields per vertex, addressable by index or by a
//! single-letter mnemonic label (`'a'..='z'`). The shape (vertex count, field
//! count) is fixed at construction.

use super::store::{GraphError, GraphResult};

const ALPHABET_SIZE: usize = 26;

/// Per-graph table of integer vertex attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatelliteStore {
    vertices: usize,
    fields: usize,
    /// Field-major: `data[field * vertices + vertex]`
    data: Vec<i64>,
    /// `labels[letter]` is the field that letter names
    labels: [Option<usize>; ALPHABET_SIZE],
}

impl SatelliteStore {
    /// Create a table with every value initialised to 0
    pub fn new(vertices: usize, fields: usize) -> Self {
        SatelliteStore {
            vertices,
            fields,
            data: vec![0; vertices * fields],
            labels: [None; ALPHABET_SIZE],
        }
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn fields(&self) -> usize {
        self.fields
    }

    fn check(&self, vertex: usize, field: usize) -> GraphResult<()> {
        if vertex >= self.vertices {
            return Err(GraphError::InvalidVertex {
                vertex,
                vertices: self.vertices,
            });
        }
        self.check_field(field)
    }

    fn check_field(&self, field: usize) -> GraphResult<()> {
        if field >= self.fields {
            return Err(GraphError::InvalidDataField {
                field,
                fields: self.fields,
            });
        }
        Ok(())
    }

    pub fn get(&self, vertex: usize, field: usize) -> GraphResult<i64> {
        self.check(vertex, field)?;
        Ok(self.data[field * self.vertices + vertex])
    }

    pub fn set(&mut self, vertex: usize, field: usize, value: i64) -> GraphResult<()> {
        self.check(vertex, field)?;
        self.data[field * self.vertices + vertex] = value;
        Ok(())
    }

    /// Unchecked write for traversal code that has already validated indices
    pub(crate) fn put(&mut self, vertex: usize, field: usize, value: i64) {
        self.data[field * self.vertices + vertex] = value;
    }

    /// All values of one field, indexed by vertex
    pub fn column(&self, field: usize) -> GraphResult<&[i64]> {
        self.check_field(field)?;
        let start = field * self.vertices;
        Ok(&self.data[start..start + self.vertices])
    }

    /// Set one field to `value` on every vertex
    pub fn fill(&mut self, field: usize, value: i64) -> GraphResult<()> {
        self.check_field(field)?;
        let start = field * self.vertices;
        self.data[start..start + self.vertices].fill(value);
        Ok(())
    }

    /// Name `field` with the letter `label`.
    ///
    /// Any previous letter for `field` is cleared, and `label` stops naming
    /// whatever field it named before.
    pub fn set_label(&mut self, field: usize, label: char) -> GraphResult<()> {
        self.check_field(field)?;
        let slot = label_slot(label)?;
        for entry in self.labels.iter_mut() {
            if *entry == Some(field) {
                *entry = None;
            }
        }
        self.labels[slot] = Some(field);
        Ok(())
    }

    /// Field named by `label`, if any
    pub fn field_for_label(&self, label: char) -> Option<usize> {
        label_slot(label).ok().and_then(|slot| self.labels[slot])
    }

    /// Letter naming `field`, if any
    pub fn label_of(&self, field: usize) -> Option<char> {
        self.labels
            .iter()
            .position(|&entry| entry == Some(field))
            .map(|slot| (b'a' + slot as u8) as char)
    }

    pub fn get_by_label(&self, vertex: usize, label: char) -> GraphResult<i64> {
        let field = self
            .field_for_label(label)
            .ok_or(GraphError::InvalidLabel(label))?;
        self.get(vertex, field)
    }

    pub fn set_by_label(&mut self, vertex: usize, label: char, value: i64) -> GraphResult<()> {
        let field = self
            .field_for_label(label)
            .ok_or(GraphError::InvalidLabel(label))?;
        self.set(vertex, field, value)
    }

    /// Fresh zeroed table with the same vertex count and `fields` fields
    pub(crate) fn reshaped(&self, fields: usize) -> Self {
        SatelliteStore::new(self.vertices, fields)
    }
}

fn label_slot(label: char) -> GraphResult<usize> {
    if label.is_ascii_lowercase() {
        Ok((label as u8 - b'a') as usize)
    } else {
        Err(GraphError::InvalidLabel(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut store = SatelliteStore::new(3, 2);
        assert_eq!(store.get(2, 1).unwrap(), 0);

        store.set(2, 1, 42).unwrap();
        assert_eq!(store.get(2, 1).unwrap(), 42);
        assert_eq!(store.column(1).unwrap(), &[0, 0, 42]);

        store.fill(0, -1).unwrap();
        assert_eq!(store.column(0).unwrap(), &[-1, -1, -1]);
    }

    #[test]
    fn test_out_of_range() {
        let mut store = SatelliteStore::new(3, 2);
        assert_eq!(
            store.get(3, 0),
            Err(GraphError::InvalidVertex { vertex: 3, vertices: 3 })
        );
        assert_eq!(
            store.set(0, 2, 1),
            Err(GraphError::InvalidDataField { field: 2, fields: 2 })
        );
        assert!(store.column(5).is_err());
    }

    #[test]
    fn test_labels_are_bijective() {
        let mut store = SatelliteStore::new(2, 14);
        store.set_label(11, 'c').unwrap();
        store.set_label(11, 'z').unwrap();
        store.set_label(6, 'w').unwrap();

        // relabelling field 11 cleared 'c'
        assert_eq!(store.field_for_label('c'), None);
        assert_eq!(store.field_for_label('z'), Some(11));
        assert_eq!(store.label_of(11), Some('z'));
        assert_eq!(store.label_of(6), Some('w'));

        // moving 'w' to another field unbinds field 6
        store.set_label(3, 'w').unwrap();
        assert_eq!(store.label_of(6), None);
        assert_eq!(store.field_for_label('w'), Some(3));
    }

    #[test]
    fn test_label_access() {
        let mut store = SatelliteStore::new(2, 3);
        store.set_label(2, 'd').unwrap();
        store.set_by_label(1, 'd', 7).unwrap();
        assert_eq!(store.get(1, 2).unwrap(), 7);
        assert_eq!(store.get_by_label(1, 'd').unwrap(), 7);

        assert_eq!(store.get_by_label(0, 'q'), Err(GraphError::InvalidLabel('q')));
        assert_eq!(store.set_label(0, 'Q'), Err(GraphError::InvalidLabel('Q')));
        assert!(store.set_label(3, 'a').is_err());
    }
}
