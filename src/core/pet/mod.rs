use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
}

/// Model: a pet up for adoption
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    pub birthday: NaiveDate,
    pub rarity: Rarity,
    pub image: String,
}

impl Pet {
    pub fn new(name: impl Into<String>, birthday: NaiveDate, rarity: Rarity, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthday,
            rarity,
            image: image.into(),
        }
    }
}

/// Display-ready strings for one pet, what a view shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetCard {
    pub name: String,
    pub image: String,
    pub age: String,
    pub adoption_fee: String,
}

/// Turns a [`Pet`] into the text a view displays
#[derive(Clone, Debug)]
pub struct PetViewModel {
    pet: Pet,
}

impl PetViewModel {
    pub fn new(pet: Pet) -> Self {
        Self { pet }
    }

    pub fn name(&self) -> &str {
        &self.pet.name
    }

    pub fn image(&self) -> &str {
        &self.pet.image
    }

    /// Whole years between the birthday and `today`; 0 for a birthday in the future
    pub fn age_years(&self, today: NaiveDate) -> u32 {
        let birthday = self.pet.birthday;
        if today < birthday {
            return 0;
        }
        let mut years = today.year() - birthday.year();
        if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    pub fn age_text(&self, today: NaiveDate) -> String {
        format!("{} years old", self.age_years(today))
    }

    pub fn adoption_fee(&self) -> &'static str {
        match self.pet.rarity {
            Rarity::Common => "$50.00",
            Rarity::Uncommon => "$75.00",
            Rarity::Rare => "$150.00",
            Rarity::VeryRare => "$500.00",
        }
    }

    pub fn card(&self, today: NaiveDate) -> PetCard {
        PetCard {
            name: self.name().to_string(),
            image: self.image().to_string(),
            age: self.age_text(today),
            adoption_fee: self.adoption_fee().to_string(),
        }
    }
}
