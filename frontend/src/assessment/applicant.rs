use serde::ser::{Serialize, SerializeMap, Serializer};

const YES_NO: &[(&str, &str)] = &[("Yes", "Yes"), ("No", "No")];

const GENDERS: &[(&str, &str)] = &[("Male", "Male"), ("Female", "Female")];

// Model category on the left, what the applicant sees on the right.
const OCCUPATIONS: &[(&str, &str)] = &[
    ("Accountants", "Accounting & Finance"),
    ("Cleaning staff", "Cleaning & Maintenance"),
    ("Cooking staff", "Food & Hospitality"),
    ("Core staff", "General Administration & Support"),
    ("Drivers", "Transportation & Delivery"),
    ("HR staff", "Human Resources (HR) & Recruitment"),
    ("High skill tech staff", "Skilled Trades & Technical Services"),
    ("IT staff", "Information Technology (IT) & Software"),
    ("Laborers", "General Labor & Manufacturing"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApplicantField {
    Age,
    Gender,
    OwnsCar,
    OwnsHouse,
    NoOfChildren,
    NetYearlyIncome,
    NoOfDaysEmployed,
    OccupationType,
    TotalFamilyMembers,
    MigrantWorker,
    YearlyDebtPayments,
    CreditLimit,
    CreditLimitUsed,
    CreditScore,
    PrevDefaults,
    DefaultInLast6Months,
}

/// How a field is entered. Number bounds are only handed to the browser as
/// `min`/`max` attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputKind {
    Number { min: u64, max: u64 },
    Choice(&'static [(&'static str, &'static str)]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
}

impl ApplicantField {
    pub const ALL: [ApplicantField; 16] = [
        ApplicantField::Age,
        ApplicantField::Gender,
        ApplicantField::OwnsCar,
        ApplicantField::OwnsHouse,
        ApplicantField::NoOfChildren,
        ApplicantField::NetYearlyIncome,
        ApplicantField::NoOfDaysEmployed,
        ApplicantField::OccupationType,
        ApplicantField::TotalFamilyMembers,
        ApplicantField::MigrantWorker,
        ApplicantField::YearlyDebtPayments,
        ApplicantField::CreditLimit,
        ApplicantField::CreditLimitUsed,
        ApplicantField::CreditScore,
        ApplicantField::PrevDefaults,
        ApplicantField::DefaultInLast6Months,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> FieldSpec {
        use ApplicantField::*;
        let (key, label, kind) = match self {
            Age => ("age", "Age", InputKind::Number { min: 18, max: 100 }),
            Gender => ("gender", "Gender", InputKind::Choice(GENDERS)),
            OwnsCar => ("owns_car", "Owns a Car", InputKind::Choice(YES_NO)),
            OwnsHouse => ("owns_house", "Owns a House", InputKind::Choice(YES_NO)),
            NoOfChildren => (
                "no_of_children",
                "Number of Dependants",
                InputKind::Number { min: 0, max: 50_000_000 },
            ),
            NetYearlyIncome => (
                "net_yearly_income",
                "Net Year Income ($)",
                InputKind::Number { min: 0, max: 1_000_000_000_000_000 },
            ),
            NoOfDaysEmployed => (
                "no_of_days_employed",
                "Number of Days Employed",
                InputKind::Number { min: 0, max: 50_000_000 },
            ),
            OccupationType => (
                "occupation_type",
                "Occupation Type",
                InputKind::Choice(OCCUPATIONS),
            ),
            TotalFamilyMembers => (
                "total_family_members",
                "Total Family Members",
                InputKind::Number { min: 1, max: 9 },
            ),
            MigrantWorker => ("migrant_worker", "Migrant Worker", InputKind::Choice(YES_NO)),
            YearlyDebtPayments => (
                "yearly_debt_payments",
                "Yearly Debt Payments",
                InputKind::Number { min: 0, max: 50_000_000 },
            ),
            CreditLimit => (
                "credit_limit",
                "Credit Limit",
                InputKind::Number { min: 0, max: 50_000_000 },
            ),
            CreditLimitUsed => (
                "credit_limit_used",
                "Credit Limit Used (%)",
                InputKind::Number { min: 0, max: 100 },
            ),
            CreditScore => (
                "credit_score",
                "Credit Score",
                InputKind::Number { min: 0, max: 850 },
            ),
            PrevDefaults => (
                "prev_defaults",
                "Previous Defaults",
                InputKind::Number { min: 0, max: 20_000 },
            ),
            DefaultInLast6Months => (
                "default_in_last_6months",
                "Default in Last 6 Months",
                InputKind::Number { min: 0, max: 50_000_000 },
            ),
        };
        FieldSpec { key, label, kind }
    }

    pub fn key(self) -> &'static str {
        self.spec().key
    }

    fn default_value(self) -> &'static str {
        match self {
            ApplicantField::Gender => "Male",
            ApplicantField::OwnsCar | ApplicantField::OwnsHouse | ApplicantField::MigrantWorker => "Yes",
            ApplicantField::OccupationType => "Accountants",
            _ => "",
        }
    }
}

/// One applicant as typed into the form. Values stay text, the prediction
/// service does its own casting.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicantRecord {
    values: [String; 16],
}

impl Default for ApplicantRecord {
    fn default() -> Self {
        Self {
            values: ApplicantField::ALL.map(|field| field.default_value().to_string()),
        }
    }
}

impl ApplicantRecord {
    pub fn get(&self, field: ApplicantField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: ApplicantField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn empty_fields(&self) -> impl Iterator<Item = ApplicantField> + '_ {
        ApplicantField::ALL
            .into_iter()
            .filter(move |field| self.get(*field).is_empty())
    }
}

impl Serialize for ApplicantRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ApplicantField::ALL.len()))?;
        for field in ApplicantField::ALL {
            map.serialize_entry(field.key(), self.get(field))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn defaults_fill_choices_and_leave_numbers_empty() {
        let record = ApplicantRecord::default();

        assert_eq!(record.get(ApplicantField::Gender), "Male");
        assert_eq!(record.get(ApplicantField::OwnsCar), "Yes");
        assert_eq!(record.get(ApplicantField::OwnsHouse), "Yes");
        assert_eq!(record.get(ApplicantField::MigrantWorker), "Yes");
        assert_eq!(record.get(ApplicantField::OccupationType), "Accountants");

        let empty: Vec<_> = record.empty_fields().collect();
        assert_eq!(empty.len(), 11, "every numeric field starts empty");
        assert!(empty.iter().all(|field| matches!(field.spec().kind, InputKind::Number { .. })));
    }

    #[test]
    fn keys_are_unique_snake_case() {
        let keys: std::collections::BTreeSet<_> =
            ApplicantField::ALL.iter().map(|field| field.key()).collect();
        assert_eq!(keys.len(), 16);
        assert!(keys.contains("default_in_last_6months"));
        assert!(keys
            .iter()
            .all(|key| key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')));
    }

    #[test]
    fn serializes_as_flat_object_of_strings() {
        let mut record = ApplicantRecord::default();
        record.set(ApplicantField::Age, "42");
        record.set(ApplicantField::CreditScore, "710");

        let body = serde_json::to_value(&record).expect("record serializes");
        let object = body.as_object().expect("body is an object");

        assert_eq!(object.len(), 16);
        assert!(object.values().all(Value::is_string));
        assert_eq!(body["age"], json!("42"));
        assert_eq!(body["credit_score"], json!("710"));
        assert_eq!(body["default_in_last_6months"], json!(""));
        assert_eq!(body["occupation_type"], json!("Accountants"));
    }

    #[test]
    fn occupation_choices_send_model_categories() {
        let InputKind::Choice(options) = ApplicantField::OccupationType.spec().kind else {
            panic!("occupation is a choice field");
        };
        assert_eq!(options.len(), 9);
        assert!(options.contains(&("IT staff", "Information Technology (IT) & Software")));
    }

    #[test]
    fn numeric_bounds_match_form_limits() {
        assert_eq!(
            ApplicantField::Age.spec().kind,
            InputKind::Number { min: 18, max: 100 }
        );
        assert_eq!(
            ApplicantField::TotalFamilyMembers.spec().kind,
            InputKind::Number { min: 1, max: 9 }
        );
        assert_eq!(
            ApplicantField::CreditScore.spec().kind,
            InputKind::Number { min: 0, max: 850 }
        );
    }
}
