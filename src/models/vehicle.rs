//! Vehicle classes and the fleet they form.

/// Width shared by every vehicle class unless configured otherwise.
pub const DEFAULT_VEHICLE_WIDTH: u64 = 10;

/// `quantity` identical vehicles of one length.
///
/// # Examples
///
/// ```
/// use u_storage::models::VehicleClass;
///
/// let v = VehicleClass::new(20, 10, 3);
/// assert_eq!(v.length(), 20);
/// assert_eq!(v.quantity(), 3);
/// assert_eq!(v.area(), 600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleClass {
    length: u64,
    width: u64,
    quantity: u64,
}

impl VehicleClass {
    /// Creates a vehicle class.
    pub fn new(length: u64, width: u64, quantity: u64) -> Self {
        Self {
            length,
            width,
            quantity,
        }
    }

    /// Length of one vehicle.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Width of one vehicle.
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Number of vehicles in this class.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Footprint of the whole class: `length * width * quantity`.
    pub fn area(&self) -> u64 {
        self.length
            .saturating_mul(self.width)
            .saturating_mul(self.quantity)
    }
}

/// All vehicle classes of one allocation request.
///
/// Every class added through [`Fleet::with_class`] shares the fleet width.
///
/// # Examples
///
/// ```
/// use u_storage::models::Fleet;
///
/// let fleet = Fleet::new(10).with_class(20, 3).with_class(50, 1);
/// assert_eq!(fleet.len(), 2);
/// assert_eq!(fleet.required_area(), 20 * 10 * 3 + 50 * 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    width: u64,
    classes: Vec<VehicleClass>,
}

impl Fleet {
    /// Creates an empty fleet whose vehicles are `width` wide.
    pub fn new(width: u64) -> Self {
        Self {
            width,
            classes: Vec::new(),
        }
    }

    /// Adds `quantity` vehicles of the given length.
    pub fn with_class(mut self, length: u64, quantity: u64) -> Self {
        self.push(length, quantity);
        self
    }

    /// Appends a class in place.
    pub fn push(&mut self, length: u64, quantity: u64) {
        self.classes
            .push(VehicleClass::new(length, self.width, quantity));
    }

    /// Width shared by all vehicles.
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Vehicle classes in request order.
    pub fn classes(&self) -> &[VehicleClass] {
        &self.classes
    }

    /// Number of vehicle classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the fleet has no vehicle classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total number of vehicles across all classes.
    pub fn num_vehicles(&self) -> u64 {
        self.classes
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.quantity()))
    }

    /// Sum of `length * width * quantity` over all classes.
    pub fn required_area(&self) -> u64 {
        self.classes
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.area()))
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new(DEFAULT_VEHICLE_WIDTH)
    }
}
