//! `CargoHold` — the weight-capped inventory a courier carries.

use courier_core::{Parcel, ParcelId};

/// Claimed parcels in transit, capped by total weight.
///
/// The hold stores parcel copies (the board keeps the authoritative record);
/// scoring code gets a plain slice via [`held`][CargoHold::held].
#[derive(Clone, Debug)]
pub struct CargoHold {
    capacity: f32,
    parcels: Vec<Parcel>,
}

impl CargoHold {
    /// An empty hold with the given weight capacity.
    pub fn new(capacity: f32) -> Self {
        Self {
            capacity: capacity.max(0.0),
            parcels: Vec::new(),
        }
    }

    /// Sum of the held parcels' weights.
    pub fn carried_weight(&self) -> f32 {
        self.parcels.iter().map(|p| p.weight).sum()
    }

    /// Weight still available before the cap.
    pub fn capacity_remaining(&self) -> f32 {
        (self.capacity - self.carried_weight()).max(0.0)
    }

    /// `true` if `parcel` fits in the remaining capacity.
    pub fn can_accept(&self, parcel: &Parcel) -> bool {
        self.carried_weight() + parcel.weight <= self.capacity
    }

    /// Add a parcel; `false` (and no change) if it does not fit.
    pub fn accept(&mut self, parcel: Parcel) -> bool {
        if !self.can_accept(&parcel) {
            return false;
        }
        self.parcels.push(parcel);
        true
    }

    /// Remove and return the parcel with `id`, if held.
    pub fn remove(&mut self, id: ParcelId) -> Option<Parcel> {
        let pos = self.parcels.iter().position(|p| p.id == id)?;
        Some(self.parcels.remove(pos))
    }

    pub fn contains(&self, id: ParcelId) -> bool {
        self.parcels.iter().any(|p| p.id == id)
    }

    /// The held parcels, in acceptance order.
    pub fn held(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}
