//! # Flexure CLI
//!
//! Terminal front-end for the beam theory comparison engine. Plays the
//! role of the interactive page: collects the four adjustable parameters
//! with their preset defaults, shows the h/L ratio, prints a summary of
//! both theories, and emits the full profile set as JSON for plotting.

use std::io::{self, BufRead, Write};

use beam_core::{compute_profiles, BeamInput, ParameterRanges};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Flexure CLI - Euler-Bernoulli vs Timoshenko Beam Comparison");
    println!("===========================================================");
    println!();

    let ranges = ParameterRanges::standard();

    let span_m = prompt_f64(
        &format!("Beam span L (m) [{}]: ", ranges.span_m.default),
        ranges.span_m.default,
    );
    let load_kn_per_m = prompt_f64(
        &format!("Uniform load q (kN/m) [{}]: ", ranges.load_kn_per_m.default),
        ranges.load_kn_per_m.default,
    );
    let width_m = prompt_f64(
        &format!("Section width b (m) [{}]: ", ranges.width_m.default),
        ranges.width_m.default,
    );
    let height_m = prompt_f64(
        &format!("Section height h (m) [{}]: ", ranges.height_m.default),
        ranges.height_m.default,
    );

    let input = BeamInput::new(
        span_m,
        load_kn_per_m,
        width_m,
        height_m,
        ranges.e_kpa,
        ranges.g_kpa,
    );

    println!();
    println!("h/L ratio = {:.4}", input.depth_to_span_ratio());
    println!();

    match compute_profiles(&input) {
        Ok(profiles) => {
            let n = input.sample_points;
            let mid = n / 2;
            let sigma_bottom = profiles.bernoulli_stress.sigma_x_kpa[0];
            let tau_centroid = profiles
                .timoshenko_stress
                .tau_xy_kpa
                .iter()
                .cloned()
                .fold(f64::MIN, f64::max);
            let w_b_mid = profiles.bernoulli_deflection.w_m[mid];
            let w_t_mid = profiles.timoshenko_deflection.w_m[mid];

            println!("═══════════════════════════════════════");
            println!("  BEAM THEORY COMPARISON");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Span:    {:.2} m", input.span_m);
            println!("  Load:    {:.2} kN/m", input.load_kn_per_m);
            println!("  Section: {:.0} x {:.0} mm", input.width_m * 1000.0, input.height_m * 1000.0);
            println!("  E = {:.0} kPa, G = {:.0} kPa, k = {:.4}", input.e_kpa, input.g_kpa, input.shear_factor);
            println!();
            println!("Section / internal forces:");
            println!("  I     = {:.6e} m4", profiles.moment_of_inertia_m4);
            println!("  M_max = {:.2} kN-m", profiles.max_moment_knm);
            println!("  V_max = {:.2} kN", profiles.max_shear_kn);
            println!();
            println!("Stresses:");
            println!("  Bottom-fiber sigma_x (both theories): {:.1} kPa", sigma_bottom);
            println!("  Centroid tau_xy (Timoshenko only):    {:.1} kPa", tau_centroid);
            println!();
            println!("Near-midspan deflection:");
            println!("  Bernoulli:  {:.6} m", w_b_mid);
            println!("  Timoshenko: {:.6} m", w_t_mid);
            println!("  Shear contribution: {:.6} m", w_t_mid - w_b_mid);
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for plotting front-ends):");
            if let Ok(json) = serde_json::to_string_pretty(&profiles) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
