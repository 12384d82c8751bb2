//! Exercise descriptions for the movements in the workout pattern.
//!
//! Fixed reference data, looked up by name the same way recipes are.

use serde::Serialize;

/// A named exercise with a short how-to description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseDetail {
    pub name: &'static str,
    pub description: &'static str,
}

const EXERCISES: [ExerciseDetail; 20] = [
    ExerciseDetail {
        name: "Bench Press",
        description: "Compound exercise targeting chest, shoulders, and triceps. Lie on a bench and press the barbell upward and downward with control.",
    },
    ExerciseDetail {
        name: "Incline Dumbbell Press",
        description: "Targets upper chest and shoulders. Lie on an incline bench and press dumbbells upward.",
    },
    ExerciseDetail {
        name: "Overhead Shoulder Press",
        description: "Press dumbbells or barbell overhead from shoulder height, engaging deltoids and triceps.",
    },
    ExerciseDetail {
        name: "Lateral Raises",
        description: "Raise dumbbells out to the sides to shoulder height, targeting lateral deltoids.",
    },
    ExerciseDetail {
        name: "Rope Pushdowns",
        description: "Using a cable machine, extend your elbows downward while gripping a rope to focus on triceps.",
    },
    ExerciseDetail {
        name: "Leg Press",
        description: "Using a leg press machine, push the platform away with your feet; targets quads, glutes and hamstrings.",
    },
    ExerciseDetail {
        name: "Bulgarian Split Squats",
        description: "Lunge variation where the rear foot is elevated; strengthens quads and glutes.",
    },
    ExerciseDetail {
        name: "Romanian Deadlift",
        description: "Hip-hinge movement focusing on hamstrings and glutes; keep back flat and lower weights toward floor.",
    },
    ExerciseDetail {
        name: "Lat Pulldown",
        description: "Pull a lat pulldown bar down to chest while seated to train the lats and upper back.",
    },
    ExerciseDetail {
        name: "Seated Cable Row",
        description: "Pull cable handles toward your torso while seated; targets middle back muscles.",
    },
    ExerciseDetail {
        name: "Face Pulls",
        description: "Using a rope attachment at chest height, pull the rope toward your face keeping elbows high; works rear delts.",
    },
    ExerciseDetail {
        name: "Dumbbell Curls",
        description: "Curl dumbbells upward to train biceps.",
    },
    ExerciseDetail {
        name: "Hammer Curls",
        description: "Curl dumbbells with a neutral grip; targets the brachialis and forearms.",
    },
    ExerciseDetail {
        name: "Hanging Knee Raises",
        description: "Hang from a bar and lift knees toward chest; targets lower abs.",
    },
    ExerciseDetail {
        name: "Ab Rollouts",
        description: "Kneel with an ab wheel; roll forward until body is extended then roll back by contracting abs.",
    },
    ExerciseDetail {
        name: "Cable Crunch",
        description: "Kneel below a cable pulley with rope attachment; crunch down to engage upper abs.",
    },
    ExerciseDetail {
        name: "Reverse Crunch",
        description: "Lie on your back and lift hips off floor by bringing knees toward chest; works lower abs.",
    },
    ExerciseDetail {
        name: "Calf isometric holds",
        description: "Stand on both feet and hold a heel raise to strengthen the Achilles tendon.",
    },
    ExerciseDetail {
        name: "Glute bridges",
        description: "Lie on your back with knees bent; lift hips upward to activate glutes and lower back.",
    },
    ExerciseDetail {
        name: "Bike HIIT",
        description: "High-intensity intervals on a stationary bike alternating sprints with recovery.",
    },
];

/// Look up an exercise by name (case-insensitive).
pub fn exercise(name: &str) -> Option<&'static ExerciseDetail> {
    EXERCISES
        .iter()
        .find(|detail| detail.name.eq_ignore_ascii_case(name.trim()))
}

/// All known exercises.
pub fn exercises() -> &'static [ExerciseDetail] {
    &EXERCISES
}
