//! Cloud and fog attenuation, ITU-R P.840.

/// Cloud liquid-water specific attenuation coefficient, (dB/km)/(g/m^3).
fn specific_cloud_coefficient(f_mhz: f64) -> f64 {
    let f_ghz = f_mhz / 1000.0;
    0.0671 * (f_ghz / 10.0).powf(1.74)
}

/// Cloud/fog attenuation in dB over `d_km`, at `f_mhz`, for a liquid water
/// content of `lwc_g_m3` g/m^3. Returns `0.0` when `lwc_g_m3 <= 0.0` or
/// `f_mhz < 10_000.0`.
pub fn cloud_fog_attenuation(d_km: f64, f_mhz: f64, lwc_g_m3: f64) -> f64 {
    if lwc_g_m3 <= 0.0 || f_mhz < 10_000.0 || d_km <= 0.0 {
        return 0.0;
    }
    specific_cloud_coefficient(f_mhz) * lwc_g_m3 * d_km
}
