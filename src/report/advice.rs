//! Fixed advice tables used by the report.
//!
//! Plain lookups from a category to text. Nothing here is mutable or random.

use crate::calculate::{FormShift, RecentForm};
use crate::models::Killer;

/// Killers below this personal escape rate are called out as weak matchups.
pub const WEAK_KILLER_RATE: f64 = 30.0;

/// Killers above this personal escape rate are called out as strong matchups.
pub const STRONG_KILLER_RATE: f64 = 70.0;

/// Counterplay tip for a killer.
pub fn killer_tip(killer: Killer) -> &'static str {
    match killer {
        Killer::Trapper => "Learn where traps get set; watch windows and pallets before vaulting.",
        Killer::Wraith => "Listen for the uncloak; stay alert even without a terror radius.",
        Killer::Hillbilly => "The chainsaw runs straight; break line of sight with tight turns.",
        Killer::Nurse => "Learn blink distances and practice breaking predictable paths.",
        Killer::Hag => "Crouch past traps and be extra careful when rescuing from the hook.",
        Killer::Doctor => "Stay healed and keep out of the static field; secure hiding spots early.",
        Killer::Huntress => "Read hatchet arcs, juke side to side and hug obstacles.",
        Killer::Cannibal => "The chainsaw sweep is wide; commit to safe pallets and windows early.",
        Killer::Nightmare => "Pallets thin out in the dream world; wake up early with an alarm clock.",
        Killer::Pig => "Remove a reverse bear trap before repairing generators.",
        Killer::Spirit => "Track scratch marks and grass movement; move unpredictably.",
        Killer::GhostFace => "Look straight at him when spotted to break the stalk.",
        Killer::Oni => "Avoid leaving blood orbs while injured; hide during Blood Fury.",
        Killer::Executioner => "Mind the trails on the floor and rescue from cages with care.",
        Killer::Blight => "Read bounce angles and avoid open areas.",
        Killer::Twins => "Time kicks on Victor and keep distance from Charlotte.",
        Killer::Trickster => "Use obstacles to break knife volleys.",
        Killer::Nemesis => "Manage contamination and keep track of the zombies.",
        Killer::Cenobite => "Stay out of the chain's line and solve the box when it is safe.",
        Killer::Artist => "Watch for crows used for tracking and read long-range swarms.",
        Killer::Onryo => "Turn TVs off to stop teleports and time condemned cleansing.",
        Killer::Dredge => "Darkness limits you; learn locker positions ahead of nightfall.",
        Killer::Mastermind => "Keep distance to avoid infection and carry spray when you can.",
        Killer::Knight => "Read guard patrols and stand where a combined attack cannot reach.",
        Killer::SkullMerchant => "Learn drone scan ranges and avoid getting claw-trapped.",
        Killer::Singularity => "Watch biopod sightlines and use EMPs to stop teleports.",
        Killer::Xenomorph => "Block tunnels with turrets and respect the tail attack range.",
        Killer::GoodGuy => "Listen for the scamper; his small frame hides well.",
        Killer::Unknown => "Avoid the weakening blast and read teleport tells.",
        Killer::Lich => "Learn spell ranges and read flight paths.",
        Killer::DarkLord => "Predict projectile paths and stay wary of teleport ambushes.",
        Killer::Houndmaster => "Track the dog and spread out to avoid combined attacks.",
        Killer::Animatronic => "Read jump-scare timing and keep the power system in mind.",
    }
}

/// Remark on how much data the analysis rests on.
pub fn sample_size_remark(games: u32) -> &'static str {
    match games {
        0..=4 => "Few games so far; play more to see clear patterns",
        5..=19 => "Patterns are starting to show",
        20..=49 => "Enough games for a reliable read",
        _ => "A large history; fine-grained adjustments are possible",
    }
}

/// Three practice goals picked by overall personal escape rate.
pub fn practice_goals(escape_rate: f64) -> [&'static str; 3] {
    if escape_rate < 25.0 {
        [
            "Basics: master pallet and window use in chases",
            "Maps: learn the layout of three common maps",
            "Perks: try a beginner-friendly perk build",
        ]
    } else if escape_rate < 50.0 {
        [
            "Matchups: study counterplay for one weak killer",
            "Teamwork: practice safe rescue timing",
            "Objectives: repair generators more efficiently",
        ]
    } else {
        [
            "Consistency: improve play in situations that still go wrong",
            "Technique: learn advanced chase tech",
            "Composure: keep decisions calm under pressure",
        ]
    }
}

/// Message for a recent-form verdict.
pub fn recent_form_message(form: RecentForm) -> &'static str {
    match form {
        RecentForm::Positive => "Strong recent form: escaped at least 2 of the last 3 matches",
        RecentForm::TeamContribution => {
            "Escaped once while the team escaped often: your support is paying off"
        }
        RecentForm::Resilient => "Escaped once with the team holding up: resilient play",
        RecentForm::ToughOpponents => "Few escapes across the team: recent opponents were tough",
        RecentForm::Steady => "Steady: no strong swing over the last 3 matches",
    }
}

/// Message for the latest five matches against the overall rate.
pub fn form_shift_message(shift: FormShift) -> &'static str {
    match shift {
        FormShift::Rising => "Playing well lately; keep it going",
        FormShift::Slipping => "Struggling a little lately; go back to the basics",
        FormShift::Stable => "Steady performance; a good pace",
    }
}
