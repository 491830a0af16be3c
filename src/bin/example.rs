//! Timber Frames Example - Single Braced Bent

use anyhow::Context;
use timber_frames::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("=== Timber Frames Example: Braced Bent ===\n");

    let mut model = FrameModel::new();

    let pine = model.new_material(Material::red_pine());
    let post = model.new_section_from_library(pine, &["American", "NDS", "Sawn Lumber", "8 x 10"])?;
    let brace = model.new_section_from_library(pine, &["American", "NDS", "Sawn Lumber", "4 x 8"])?;

    // A single bent, 12 ft wide with a 4:12 roof
    //
    //                R
    //              /   \
    //            /       \
    //          T1         T2
    //          |\_________/|   tie at 8.5 ft
    //          | \       / |
    //          |           |
    //          B1         B2
    //          ^           ^
    //        Fixed       Fixed
    //
    let width = 12.0;
    let height = 10.0;
    let tie_height = 8.5;
    let brace_rise = 3.0;
    let ridge = height + width / 2.0 * 4.0 / 12.0;

    let left = model.new_continuous_member(post, (-width / 2.0, 0.0, 0.0), (-width / 2.0, height, 0.0))?;
    let right = model.new_continuous_member(post, (width / 2.0, 0.0, 0.0), (width / 2.0, height, 0.0))?;

    let (b1, t1) = model.member_ends(left)?;
    let (b2, t2) = model.member_ends(right)?;
    model.fixed_support(b1)?;
    model.fixed_support(b2)?;

    let peak = model.new_node(0.0, ridge, 0.0);
    model.new_continuous_member_between_nodes(post, t1, peak)?;
    model.new_continuous_member_between_nodes(post, t2, peak)?;

    // Tie between the posts, then knee braces under it
    let j1 = model.split_member_at_distance(left, tie_height)?;
    let j2 = model.split_member_at_distance(right, tie_height)?;
    let tie = model.new_continuous_member_between_nodes(post, j1, j2)?;

    model
        .brace(left, tie, brace, brace_rise, Quadrant::NP)
        .context("bracing left post")?;
    model
        .brace(right, tie, brace, brace_rise, Quadrant::NN)
        .context("bracing right post")?;

    // Loads
    let eave_l = model.find_nearest_node(-width / 2.0, height, 0.0).context("empty model")?;
    let eave_r = model.find_nearest_node(width / 2.0, height, 0.0).context("empty model")?;
    model.new_area_load(&[eave_l, peak, eave_r], -0.06, Axis::Y, "snow")?;
    model.new_self_weight();
    model.load_combinations = LoadCombinations::ultimate_limit_states();

    println!("Nodes:");
    for (id, node) in model.nodes().iter() {
        println!("  {:>2}: ({:7.3}, {:7.3}, {:7.3})", id, node.x, node.y, node.z);
    }

    println!("\nMembers:");
    for member in model.members() {
        let chain: Vec<String> = member.nodes().iter().map(ToString::to_string).collect();
        println!(
            "  {:>2}: nodes [{}], length {:.3} ft",
            member.id(),
            chain.join(" -> "),
            member.length(model.nodes())?
        );
    }

    println!("\nSummary: {}", model.summary());

    let json = model.to_json(true)?;
    println!("Document size: {} bytes", json.len());

    println!("\n=== Example Complete ===");
    Ok(())
}
