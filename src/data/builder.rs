use chrono::NaiveDate;

use crate::data::*;

impl Subject {
    /// Start building a [Subject] of the given sex
    pub fn builder(sex: Sex) -> SubjectBuilder {
        SubjectBuilder {
            subject: Subject {
                sex,
                birth_date: None,
                evaluation_date: None,
                weight_kg: None,
                height_cm: None,
                father_height_cm: None,
                mother_height_cm: None,
            },
        }
    }
}

pub struct SubjectBuilder {
    subject: Subject,
}

impl SubjectBuilder {
    pub fn born(mut self, date: NaiveDate) -> Self {
        self.subject.birth_date = Some(date);
        self
    }

    /// Evaluation date; today is used when never set
    pub fn evaluated(mut self, date: NaiveDate) -> Self {
        self.subject.evaluation_date = Some(date);
        self
    }

    pub fn weight_kg(mut self, weight: f64) -> Self {
        self.subject.weight_kg = Some(weight);
        self
    }

    pub fn height_cm(mut self, height: f64) -> Self {
        self.subject.height_cm = Some(height);
        self
    }

    pub fn father_height_cm(mut self, height: f64) -> Self {
        self.subject.father_height_cm = Some(height);
        self
    }

    pub fn mother_height_cm(mut self, height: f64) -> Self {
        self.subject.mother_height_cm = Some(height);
        self
    }

    pub fn parents(self, father: f64, mother: f64) -> Self {
        self.father_height_cm(father).mother_height_cm(mother)
    }

    pub fn build(self) -> Subject {
        self.subject
    }
}
