use serde_json::Map;

use crate::resume::models::{Education, Experience, Kind, Record, Skill};

/// In-memory record store backing the resume API.
///
/// Holds one ordered sequence per record kind. A record's id is its position
/// in the sequence at request time; removing a record shifts every later id
/// down by one. Nothing is persisted, so the store resets on restart.
#[derive(Debug, Default)]
pub struct RecordStore {
    experience: Vec<Record>,
    education: Vec<Record>,
    skill: Vec<Record>,
}

impl RecordStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The startup state: one example record per collection.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.append(
            Kind::Experience,
            Record::Experience(Experience {
                title: "Software Developer".to_string(),
                company: "A Cool Company".to_string(),
                start_date: "October 2022".to_string(),
                end_date: "Present".to_string(),
                description: "Writing Python Code".to_string(),
                logo: "example-logo.png".to_string(),
                extra: Map::new(),
            }),
        );
        store.append(
            Kind::Education,
            Record::Education(Education {
                course: "Computer Science".to_string(),
                school: "University of Tech".to_string(),
                start_date: "September 2019".to_string(),
                end_date: "July 2022".to_string(),
                grade: "80%".to_string(),
                logo: "example-logo.png".to_string(),
                extra: Map::new(),
            }),
        );
        store.append(
            Kind::Skill,
            Record::Skill(Skill {
                name: "Python".to_string(),
                proficiency: "1-2 Years".to_string(),
                logo: "example-logo.png".to_string(),
                extra: Map::new(),
            }),
        );
        store
    }

    fn collection(&self, kind: Kind) -> &Vec<Record> {
        match kind {
            Kind::Experience => &self.experience,
            Kind::Education => &self.education,
            Kind::Skill => &self.skill,
        }
    }

    fn collection_mut(&mut self, kind: Kind) -> &mut Vec<Record> {
        match kind {
            Kind::Experience => &mut self.experience,
            Kind::Education => &mut self.education,
            Kind::Skill => &mut self.skill,
        }
    }

    /// Appends a record to its collection and returns the new record's index.
    pub fn append(&mut self, kind: Kind, record: Record) -> usize {
        let collection = self.collection_mut(kind);
        collection.push(record);
        collection.len() - 1
    }

    pub fn get_all(&self, kind: Kind) -> &[Record] {
        self.collection(kind)
    }

    pub fn get_at(&self, kind: Kind, index: usize) -> Option<&Record> {
        self.collection(kind).get(index)
    }

    /// Replaces the record at `index` in place, returning the stored value.
    pub fn replace_at(&mut self, kind: Kind, index: usize, record: Record) -> Option<&Record> {
        let slot = self.collection_mut(kind).get_mut(index)?;
        *slot = record;
        Some(&*slot)
    }

    /// Removes and returns the record at `index`. Every record after it
    /// shifts down by one position.
    pub fn remove_at(&mut self, kind: Kind, index: usize) -> Option<Record> {
        let collection = self.collection_mut(kind);
        if index < collection.len() {
            Some(collection.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self, kind: Kind) -> usize {
        self.collection(kind).len()
    }

    pub fn is_empty(&self, kind: Kind) -> bool {
        self.collection(kind).is_empty()
    }
}
