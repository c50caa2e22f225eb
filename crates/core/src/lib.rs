#![forbid(unsafe_code)]

pub mod ids {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum IdError {
        NonPositive,
    }

    /// Rowid of a garden. The default garden created by the scoping
    /// migration always has rowid 1.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GardenId(i64);

    impl GardenId {
        pub fn try_new(value: i64) -> Result<Self, IdError> {
            if value <= 0 {
                return Err(IdError::NonPositive);
            }
            Ok(Self(value))
        }

        pub fn get(self) -> i64 {
            self.0
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PlantTypeId(i64);

    impl PlantTypeId {
        pub fn try_new(value: i64) -> Result<Self, IdError> {
            if value <= 0 {
                return Err(IdError::NonPositive);
            }
            Ok(Self(value))
        }

        pub fn get(self) -> i64 {
            self.0
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PlantId(i64);

    impl PlantId {
        pub fn try_new(value: i64) -> Result<Self, IdError> {
            if value <= 0 {
                return Err(IdError::NonPositive);
            }
            Ok(Self(value))
        }

        pub fn get(self) -> i64 {
            self.0
        }
    }
}

pub mod model {
    /// New plants start out active; status is otherwise free-form text.
    pub const DEFAULT_PLANT_STATUS: &str = "active";

    /// The two activity kinds the schema's CHECK constraint admits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum ActivityKind {
        Watering,
        Fertilizing,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct UnknownActivityKind;

    impl ActivityKind {
        pub const ALL: [Self; 2] = [Self::Watering, Self::Fertilizing];

        pub fn as_str(self) -> &'static str {
            match self {
                Self::Watering => "watering",
                Self::Fertilizing => "fertilizing",
            }
        }

        pub fn parse(value: &str) -> Result<Self, UnknownActivityKind> {
            match value.trim() {
                "watering" => Ok(Self::Watering),
                "fertilizing" => Ok(Self::Fertilizing),
                _ => Err(UnknownActivityKind),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ids::{GardenId, IdError};
    use super::model::{ActivityKind, UnknownActivityKind};

    #[test]
    fn activity_kind_round_trips_through_its_string_form() {
        for kind in ActivityKind::ALL {
            assert_eq!(ActivityKind::parse(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn activity_kind_rejects_values_outside_the_enumeration() {
        assert_eq!(ActivityKind::parse("pruning"), Err(UnknownActivityKind));
        assert_eq!(ActivityKind::parse(""), Err(UnknownActivityKind));
        assert_eq!(ActivityKind::parse("Watering"), Err(UnknownActivityKind));
    }

    #[test]
    fn activity_kind_parse_trims_whitespace() {
        assert_eq!(ActivityKind::parse(" watering "), Ok(ActivityKind::Watering));
    }

    #[test]
    fn garden_id_rejects_non_positive_rowids() {
        assert_eq!(GardenId::try_new(0), Err(IdError::NonPositive));
        assert_eq!(GardenId::try_new(-3), Err(IdError::NonPositive));
        assert_eq!(GardenId::try_new(1).map(GardenId::get), Ok(1));
    }
}
