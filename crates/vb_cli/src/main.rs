//! Lineup board command line tool
//!
//! Coach-side front end over `vb_core`: create and inspect team documents,
//! rotate lineups, resolve drops, and manage save slots.

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use anyhow::{bail, Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use vb_cli::{load_team, render_rotation, render_team, render_zones, store_team};
#[cfg(feature = "cli")]
use vb_core::court::constants::canvas;
#[cfg(feature = "cli")]
use vb_core::court::{zone_at, ControlPointId};
#[cfg(feature = "cli")]
use vb_core::data::{preset, presets, MeshPreset};
#[cfg(feature = "cli")]
use vb_core::lineup::{generate_practice_roster, BenchSide, Placement, Team};
#[cfg(feature = "cli")]
use vb_core::save::{BoardSave, SaveManager};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "vb_cli")]
#[command(about = "Volleyball lineup board tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Create a new team document with a numbered default roster
    New {
        /// Team name
        name: String,

        /// Output path for the team document
        #[arg(long)]
        out: PathBuf,

        /// Mesh preset id applied to the first rotation (see `preset`)
        #[arg(long)]
        preset: Option<String>,
    },
    /// Print a team document
    Show {
        /// Team document path
        team: PathBuf,
    },
    /// Rotate a lineup and write the document back
    Rotate {
        /// Team document path
        team: PathBuf,

        /// Number of rotation steps
        #[arg(long, default_value_t = 1)]
        steps: u32,

        /// Rotate counter-clockwise instead of clockwise
        #[arg(long)]
        counter: bool,

        /// Rotation name (defaults to the first rotation)
        #[arg(long)]
        rotation: Option<String>,
    },
    /// Print the zone layout of a rotation's mesh
    Zones {
        /// Team document path
        team: PathBuf,

        /// Rotation name (defaults to the first rotation)
        #[arg(long)]
        rotation: Option<String>,
    },
    /// Drop a player at canvas coordinates and write the document back
    Drop {
        /// Team document path
        team: PathBuf,

        /// Jersey number of the player to move
        #[arg(long)]
        number: u8,

        /// Drop x in canvas coordinates
        #[arg(long)]
        x: f32,

        /// Drop y in canvas coordinates
        #[arg(long)]
        y: f32,

        /// Rotation name (defaults to the first rotation)
        #[arg(long)]
        rotation: Option<String>,
    },
    /// List mesh presets, or print one preset's control points
    Preset {
        /// Preset id to expand
        #[arg(long)]
        id: Option<String>,
    },
    /// Store a team document into a save slot
    Save {
        /// Team document path
        team: PathBuf,

        /// Save directory
        #[arg(long)]
        dir: PathBuf,

        /// Slot number (0 is the autosave slot)
        #[arg(long, default_value_t = 1)]
        slot: u8,
    },
    /// Load a save slot back into a team document
    Load {
        /// Save directory
        #[arg(long)]
        dir: PathBuf,

        /// Slot number
        #[arg(long, default_value_t = 1)]
        slot: u8,

        /// Output path for the team document
        #[arg(long)]
        out: PathBuf,
    },
    /// Generate a practice team with a randomized roster
    Demo {
        /// Team name
        #[arg(long, default_value = "Practice")]
        name: String,

        /// Roster seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Roster size
        #[arg(long, default_value_t = 12)]
        players: usize,

        /// Output path for the team document
        #[arg(long)]
        out: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn rotation_index(team: &Team, name: Option<&str>) -> Result<usize> {
    match name {
        Some(name) => team
            .rotations
            .iter()
            .position(|r| r.name == name)
            .with_context(|| format!("No rotation named '{}'", name)),
        None => {
            if team.rotations.is_empty() {
                bail!("Team has no rotations");
            }
            Ok(0)
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { name, out, preset: preset_id } => {
            let mut team = Team::new(&name);
            let mesh = match preset_id {
                Some(id) => match preset(&id) {
                    Some(entry) => entry.to_mesh(),
                    None => bail!("Unknown preset: {}", id),
                },
                None => MeshPreset::from_env_or_default(),
            };
            for rotation in &mut team.rotations {
                rotation.mesh = mesh;
            }
            store_team(&out, &team)?;
            println!("✅ Created team '{}' at {}", team.name, out.display());
        }
        Commands::Show { team } => {
            let team = load_team(&team)?;
            print!("{}", render_team(&team));
        }
        Commands::Rotate { team: path, steps, counter, rotation } => {
            let mut team = load_team(&path)?;
            let index = rotation_index(&team, rotation.as_deref())?;
            for _ in 0..steps {
                if counter {
                    team.rotations[index].rotate_counter_clockwise();
                } else {
                    team.rotations[index].rotate_clockwise();
                }
            }
            team.normalize_all();
            store_team(&path, &team)?;

            let direction = if counter { "counter-clockwise" } else { "clockwise" };
            println!("✅ Rotated '{}' {} {} step(s)", team.rotations[index].name, direction, steps);
            print!("{}", render_rotation(&team, &team.rotations[index]));
        }
        Commands::Zones { team, rotation } => {
            let team = load_team(&team)?;
            let index = rotation_index(&team, rotation.as_deref())?;
            print!("{}", render_zones(&team.rotations[index].mesh));
        }
        Commands::Drop { team: path, number, x, y, rotation } => {
            let mut team = load_team(&path)?;
            let index = rotation_index(&team, rotation.as_deref())?;
            let player = team
                .player_by_number(number)
                .with_context(|| format!("No player wearing #{}", number))?
                .id
                .clone();

            let target = match zone_at(&team.rotations[index].mesh, (x, y)) {
                Some(zone) => Placement::Slot(zone),
                None => {
                    // Off-court drops bench the player on the nearer sideline.
                    let side = if x < canvas::WIDTH / 2.0 {
                        BenchSide::Left
                    } else {
                        BenchSide::Right
                    };
                    Placement::Bench { side, index: 0 }
                }
            };
            team.rotations[index].place(player, target);
            team.normalize_all();
            store_team(&path, &team)?;

            match target {
                Placement::Slot(zone) => println!("✅ #{} placed on {}", number, zone.as_str()),
                Placement::Bench { side, .. } => {
                    println!("✅ #{} sent to the {} bench", number, side.as_str())
                }
            }
            print!("{}", render_rotation(&team, &team.rotations[index]));
        }
        Commands::Preset { id } => match id {
            Some(id) => {
                let entry = preset(&id).with_context(|| format!("Unknown preset: {}", id))?;
                println!("{} ({})", entry.id, entry.label);
                let mesh = entry.to_mesh();
                for point in ControlPointId::ALL {
                    let (x, y) = mesh.point(point);
                    println!("  {:<20} ({:>6.1}, {:>6.1})", point.as_str(), x, y);
                }
            }
            None => {
                println!("📄 {} presets:", presets().len());
                for entry in presets() {
                    println!(
                        "  {:<16} {} (seams {:.0}/{:.0}, attack {:.0})",
                        entry.id, entry.label, entry.seam_a_x, entry.seam_b_x, entry.attack_y
                    );
                }
            }
        },
        Commands::Save { team: path, dir, slot } => {
            let team = load_team(&path)?;
            let name = team.name.clone();
            let save = BoardSave::from_teams(vec![team]);
            SaveManager::new(&dir).save_to_slot(slot, &save)?;
            println!("✅ Saved '{}' to slot {} in {}", name, slot, dir.display());
        }
        Commands::Load { dir, slot, out } => {
            let save = SaveManager::new(&dir).load_from_slot(slot)?;
            let team = match &save.active_team {
                Some(id) => save.teams.iter().find(|t| &t.id == id).cloned(),
                None => None,
            }
            .or_else(|| save.teams.first().cloned())
            .context("Save contains no teams")?;
            store_team(&out, &team)?;
            println!("✅ Loaded '{}' from slot {} into {}", team.name, slot, out.display());
            print!("{}", render_team(&team));
        }
        Commands::Demo { name, seed, players, out } => {
            let roster = generate_practice_roster(seed, players);
            let team = Team::from_roster(&name, roster);
            store_team(&out, &team)?;
            println!(
                "✅ Generated '{}' ({} players, seed {}) at {}",
                team.name,
                team.roster.len(),
                seed,
                out.display()
            );
            print!("{}", render_team(&team));
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("vb_cli requires the 'cli' feature to be enabled.");
    std::process::exit(1);
}
