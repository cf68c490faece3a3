/// Universal list utilities (search, sort) shared by every entity list
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt;

/// Types whose records can be found by free-text search
pub trait Searchable {
    /// Text of every searchable field; numbers in their decimal form
    fn search_fields(&self) -> Vec<String>;

    /// Case-insensitive substring match over the searchable fields (logical OR).
    /// The empty filter matches everything.
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Value of a field as used for ordering
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(i64),
    /// Parsed date; `None` for missing or unparsable values, ordered first
    Date(Option<NaiveDateTime>),
    Flag(bool),
}

impl SortValue<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Flag(_) => 0,
            SortValue::Number(_) => 1,
            SortValue::Date(_) => 2,
            SortValue::Text(_) => 3,
        }
    }

    /// Natural ordering of the value kind
    pub fn cmp_natural(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Flag(a), SortValue::Flag(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Types whose records can be ordered by one of their fields
pub trait Sortable {
    /// Closed set of sortable columns
    type Field: Copy + Eq + fmt::Debug + Send + Sync + 'static;

    fn sort_value(&self, field: Self::Field) -> SortValue<'_>;

    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering {
        self.sort_value(field).cmp_natural(&other.sort_value(field))
    }
}

/// A record managed by a list page
pub trait ListRecord: Searchable + Sortable + Clone + 'static {
    /// Server-assigned unique id
    fn id(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Header click: the same column flips direction, a new column starts ascending
    pub fn toggled(current: Option<Self>, field: F) -> Self {
        match current {
            Some(sort) if sort.field == field => Self {
                field,
                direction: sort.direction.flip(),
            },
            _ => Self::ascending(field),
        }
    }

    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        T: Sortable<Field = F>,
    {
        let cmp = a.compare_by_field(b, self.field);
        match self.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator<F: Copy + Eq>(sort: Option<SortState<F>>, field: F) -> &'static str {
    match sort {
        Some(s) if s.field == field => match s.direction {
            SortDirection::Ascending => " ↑",
            SortDirection::Descending => " ↓",
        },
        _ => "",
    }
}
