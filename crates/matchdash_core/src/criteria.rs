use crate::SearchFilter;

/// The four named criteria sequences of a [`SearchFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
    Skills,
    Technologies,
    JobTitles,
    Industries,
}

impl SearchFilter {
    fn sequence_mut(&mut self, field: CriteriaField) -> &mut Vec<String> {
        match field {
            CriteriaField::Skills => &mut self.skills,
            CriteriaField::Technologies => &mut self.technologies,
            CriteriaField::JobTitles => &mut self.job_titles,
            CriteriaField::Industries => &mut self.industries,
        }
    }

    /// Appends a trimmed value to the sequence, preserving insertion order.
    /// Empty-after-trim values and case-sensitive duplicates within the same
    /// sequence are rejected silently. Returns whether anything changed.
    pub fn add_criterion(&mut self, field: CriteriaField, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let sequence = self.sequence_mut(field);
        if sequence.iter().any(|existing| existing == value) {
            return false;
        }
        sequence.push(value.to_owned());
        true
    }

    /// Deletes the first exact match from the sequence; a missing value is a
    /// no-op. Returns whether anything changed.
    pub fn remove_criterion(&mut self, field: CriteriaField, value: &str) -> bool {
        let sequence = self.sequence_mut(field);
        match sequence.iter().position(|existing| existing == value) {
            Some(index) => {
                sequence.remove(index);
                true
            }
            None => false,
        }
    }
}
