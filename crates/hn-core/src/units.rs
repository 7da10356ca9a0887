// hn-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, HeatTransfer as UomHeatTransfer, Length as UomLength, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type HeatTransfer = UomHeatTransfer;
pub type Length = UomLength;
pub type Volume = UomVolume;

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

/// U-value constructor, W/(m²·K).
#[inline]
pub fn w_per_m2k(v: f64) -> HeatTransfer {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    HeatTransfer::new::<watt_per_square_meter_kelvin>(v)
}
