//! Parcels submitted for pricing and delivery.

use thiserror::Error;

/// A single parcel awaiting pricing and dispatch.
///
/// Weight is always positive; distance may be zero for parcels collected at
/// the depot.
///
/// # Examples
///
/// ```
/// use courier_core::Package;
///
/// # fn main() -> Result<(), courier_core::PackageError> {
/// let package = Package::new("PKG1", 50, 30, "OFR001")?;
/// assert_eq!(package.weight_kg(), 50);
/// assert_eq!(package.offer_code(), "OFR001");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Package {
    id: String,
    weight_kg: u32,
    distance_km: u32,
    offer_code: String,
}

/// Errors returned by [`Package::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PackageError {
    /// The identifier was blank.
    #[error("package id must not be empty")]
    EmptyId,
    /// The parcel weighed nothing.
    #[error("package {id} must weigh at least 1 kg")]
    ZeroWeight {
        /// Identifier of the rejected package.
        id: String,
    },
}

impl Package {
    /// Validates and constructs a [`Package`].
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::EmptyId`] for a blank identifier and
    /// [`PackageError::ZeroWeight`] when `weight_kg` is zero.
    pub fn new(
        id: impl Into<String>,
        weight_kg: u32,
        distance_km: u32,
        offer_code: impl Into<String>,
    ) -> Result<Self, PackageError> {
        let identifier: String = id.into();
        if identifier.trim().is_empty() {
            return Err(PackageError::EmptyId);
        }
        if weight_kg == 0 {
            return Err(PackageError::ZeroWeight { id: identifier });
        }
        Ok(Self {
            id: identifier,
            weight_kg,
            distance_km,
            offer_code: offer_code.into(),
        })
    }

    /// Unique package identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parcel weight in kilograms.
    #[must_use]
    pub const fn weight_kg(&self) -> u32 {
        self.weight_kg
    }

    /// One-way delivery distance in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> u32 {
        self.distance_km
    }

    /// Offer code supplied with the parcel. It may not match any offer.
    #[must_use]
    pub fn offer_code(&self) -> &str {
        &self.offer_code
    }
}
