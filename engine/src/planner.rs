//! Workout plan generation
//!
//! Two paths produce the same `WorkoutPlan` shape: delegation through the
//! gateway when a credential is present, and a deterministic local template
//! keyed by goal. Delegation failures are logged and absorbed; the caller
//! only ever sees a plan or an input error.

use crate::gateway::{ApiCredential, Contract, DelegationGateway};
use gymtrack_shared::errors::GenerationError;
use gymtrack_shared::health_metrics::{self, BmiResult};
use gymtrack_shared::models::{BiometricInput, DayPlan, Exercise, FitnessLevel, Goal, WorkoutPlan};
use gymtrack_shared::validation::validate_biometrics;
use tracing::warn;

const SYSTEM_PROMPT: &str = "You are a professional fitness trainer. Generate detailed, personalized workout plans based on BMI and fitness goals. Always respond with valid JSON.";

impl Contract for WorkoutPlan {
    fn enforce(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("plan title is empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("plan description is empty".to_string());
        }
        if self.exercises.is_empty() {
            return Err("plan carries no exercises".to_string());
        }
        for exercise in &self.exercises {
            if exercise.name.trim().is_empty() {
                return Err("exercise name is empty".to_string());
            }
            if exercise.sets < 1 {
                return Err(format!("exercise '{}' has zero sets", exercise.name));
            }
        }
        if self.weekly_schedule.len() != 7 {
            return Err(format!(
                "weekly schedule has {} days, expected 7",
                self.weekly_schedule.len()
            ));
        }
        Ok(())
    }
}

/// Plan generator service
pub struct PlanGenerator;

impl PlanGenerator {
    /// Generate a workout plan for the given biometrics.
    ///
    /// With a credential, one delegation attempt is made; any gateway
    /// failure falls back to the local template. Without one, the local
    /// template is used directly. Only invalid input is an error.
    pub async fn generate(
        gateway: &DelegationGateway,
        input: &BiometricInput,
        credential: Option<&ApiCredential>,
    ) -> Result<(BmiResult, WorkoutPlan), GenerationError> {
        validate_biometrics(input).map_err(GenerationError::InvalidInput)?;

        let bmi = health_metrics::compute_bmi(input.height_value, input.weight_value, input.unit_system)
            .ok_or_else(|| {
                GenerationError::InvalidInput("height and weight must be positive".to_string())
            })?;

        if credential.is_some() {
            let user_prompt = Self::build_prompt(input, &bmi);
            match gateway
                .request::<WorkoutPlan>(credential, SYSTEM_PROMPT, &user_prompt)
                .await
            {
                Ok(plan) => return Ok((bmi, plan)),
                Err(e) => {
                    warn!(error = %e, "plan delegation failed, using local template");
                }
            }
        }

        let plan = Self::local_plan(input, &bmi);
        Ok((bmi, plan))
    }

    fn build_prompt(input: &BiometricInput, bmi: &BmiResult) -> String {
        format!(
            r#"Generate a personalized workout plan for someone with:
- BMI: {bmi} ({category})
- Goal: {goal}
- Fitness Level: {level}

Respond with a JSON object containing:
{{
  "title": "Plan name",
  "description": "Brief description",
  "bmiCategory": "{category}",
  "exercises": [{{"name": "Exercise", "sets": 3, "reps": "10-12", "restSeconds": 60, "targetMuscle": "Muscle", "difficulty": "{level}"}}],
  "tips": ["tip1", "tip2"],
  "weeklySchedule": [{{"day": "Monday", "focus": "Focus area", "exercises": ["ex1", "ex2"]}}]
}}"#,
            bmi = bmi.value,
            category = bmi.category.label(),
            goal = input.goal.prompt_label(),
            level = input.fitness_level,
        )
    }

    /// Deterministic plan template keyed by goal.
    ///
    /// Same input always yields the same plan; only the difficulty stamp and
    /// the BMI figures in the description vary with the rest of the input.
    pub fn local_plan(input: &BiometricInput, bmi: &BmiResult) -> WorkoutPlan {
        let level = input.fitness_level;
        let category = bmi.category.label();

        match input.goal {
            Goal::Lose => WorkoutPlan {
                title: "Fat Burning Program".to_string(),
                description: format!(
                    "Designed for your BMI of {} ({}), this high-intensity program focuses on burning calories while building lean muscle.",
                    bmi.value, category
                ),
                bmi_category: category.to_string(),
                exercises: vec![
                    exercise("Jumping Jacks", 3, "30 seconds", 20, "Full Body", level),
                    exercise("Burpees", 3, "10-15", 30, "Full Body", level),
                    exercise("Mountain Climbers", 3, "20", 20, "Core", level),
                    exercise("High Knees", 3, "30 seconds", 20, "Cardio", level),
                    exercise("Squat Jumps", 3, "12", 30, "Legs", level),
                    exercise("Plank", 3, "45 seconds", 30, "Core", level),
                ],
                tips: vec![
                    "Focus on high-intensity intervals for maximum calorie burn".to_string(),
                    "Stay hydrated throughout your workout".to_string(),
                    "Combine with a caloric deficit diet for best results".to_string(),
                    "Rest 24-48 hours between intense sessions".to_string(),
                ],
                weekly_schedule: vec![
                    day("Monday", "HIIT Cardio", &["Jumping Jacks", "Burpees", "Mountain Climbers"]),
                    day("Tuesday", "Lower Body", &["Squats", "Lunges", "Squat Jumps"]),
                    day("Wednesday", "Active Recovery", &["Light Walking", "Stretching"]),
                    day("Thursday", "Upper Body", &["Push-ups", "Dips", "Plank"]),
                    day("Friday", "Full Body HIIT", &["Burpees", "High Knees", "Mountain Climbers"]),
                    day("Saturday", "Cardio", &["Running", "Jump Rope", "Cycling"]),
                    day("Sunday", "Rest", &["Complete Rest", "Light Stretching"]),
                ],
            },
            Goal::Gain => WorkoutPlan {
                title: "Muscle Building Program".to_string(),
                description: format!(
                    "Tailored for your BMI of {} ({}), this strength-focused program will help you build lean muscle mass.",
                    bmi.value, category
                ),
                bmi_category: category.to_string(),
                exercises: vec![
                    exercise("Barbell Squats", 4, "8-10", 90, "Legs", level),
                    exercise("Bench Press", 4, "8-10", 90, "Chest", level),
                    exercise("Deadlifts", 4, "6-8", 120, "Back", level),
                    exercise("Overhead Press", 3, "8-10", 60, "Shoulders", level),
                    exercise("Pull-ups", 3, "8-12", 60, "Back", level),
                    exercise("Barbell Rows", 4, "8-10", 60, "Back", level),
                ],
                tips: vec![
                    "Focus on progressive overload - increase weight gradually".to_string(),
                    "Consume 1.6-2.2g protein per kg of body weight".to_string(),
                    "Get 7-9 hours of sleep for optimal recovery".to_string(),
                    "Eat in a slight caloric surplus (300-500 calories)".to_string(),
                ],
                weekly_schedule: vec![
                    day("Monday", "Chest & Triceps", &["Bench Press", "Incline Press", "Dips"]),
                    day("Tuesday", "Back & Biceps", &["Deadlifts", "Pull-ups", "Rows"]),
                    day("Wednesday", "Rest", &["Light Stretching"]),
                    day("Thursday", "Legs", &["Squats", "Leg Press", "Calf Raises"]),
                    day("Friday", "Shoulders & Arms", &["Overhead Press", "Lateral Raises", "Curls"]),
                    day("Saturday", "Full Body", &["Compound Movements", "Core Work"]),
                    day("Sunday", "Rest", &["Complete Rest", "Active Recovery"]),
                ],
            },
            Goal::Maintain => WorkoutPlan {
                title: "Balanced Fitness Program".to_string(),
                description: format!(
                    "Perfect for your BMI of {} ({}), this balanced program maintains your current fitness while preventing muscle loss.",
                    bmi.value, category
                ),
                bmi_category: category.to_string(),
                exercises: vec![
                    exercise("Goblet Squats", 3, "12-15", 60, "Legs", level),
                    exercise("Push-ups", 3, "15-20", 45, "Chest", level),
                    exercise("Dumbbell Rows", 3, "12", 45, "Back", level),
                    exercise("Plank", 3, "60 seconds", 30, "Core", level),
                    exercise("Lunges", 3, "12 each leg", 45, "Legs", level),
                    exercise("Shoulder Press", 3, "12", 45, "Shoulders", level),
                ],
                tips: vec![
                    "Maintain consistency - 3-4 workouts per week is ideal".to_string(),
                    "Mix cardio and strength training for balanced fitness".to_string(),
                    "Focus on quality of movement over quantity".to_string(),
                    "Listen to your body and adjust intensity as needed".to_string(),
                ],
                weekly_schedule: vec![
                    day("Monday", "Full Body Strength", &["Squats", "Push-ups", "Rows"]),
                    day("Tuesday", "Cardio", &["30min Running", "Jump Rope"]),
                    day("Wednesday", "Rest", &["Light Walking", "Stretching"]),
                    day("Thursday", "Upper Body", &["Push-ups", "Shoulder Press", "Rows"]),
                    day("Friday", "Lower Body", &["Squats", "Lunges", "Calf Raises"]),
                    day("Saturday", "Active Recovery", &["Yoga", "Light Cardio"]),
                    day("Sunday", "Rest", &["Complete Rest"]),
                ],
            },
        }
    }
}

fn exercise(
    name: &str,
    sets: u32,
    reps: &str,
    rest_seconds: u32,
    target_muscle: &str,
    difficulty: FitnessLevel,
) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        rest_seconds,
        target_muscle: target_muscle.to_string(),
        difficulty,
    }
}

fn day(day: &str, focus: &str, exercises: &[&str]) -> DayPlan {
    DayPlan {
        day: day.to_string(),
        focus: focus.to_string(),
        exercises: exercises.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymtrack_shared::models::UnitSystem;
    use rstest::rstest;

    fn input(goal: Goal) -> BiometricInput {
        BiometricInput {
            height_value: 175.0,
            weight_value: 70.0,
            unit_system: UnitSystem::Metric,
            goal,
            fitness_level: FitnessLevel::Intermediate,
        }
    }

    fn bmi_for(input: &BiometricInput) -> BmiResult {
        health_metrics::compute_bmi(input.height_value, input.weight_value, input.unit_system)
            .unwrap()
    }

    #[rstest]
    #[case(Goal::Lose, "Fat Burning Program")]
    #[case(Goal::Gain, "Muscle Building Program")]
    #[case(Goal::Maintain, "Balanced Fitness Program")]
    fn test_local_plan_shape(#[case] goal: Goal, #[case] title: &str) {
        let input = input(goal);
        let bmi = bmi_for(&input);
        let plan = PlanGenerator::local_plan(&input, &bmi);

        assert_eq!(plan.title, title);
        assert_eq!(plan.exercises.len(), 6);
        assert_eq!(plan.tips.len(), 4);
        assert_eq!(plan.weekly_schedule.len(), 7);
        assert!(plan.enforce().is_ok());
    }

    #[rstest]
    #[case(Goal::Lose)]
    #[case(Goal::Gain)]
    #[case(Goal::Maintain)]
    fn test_local_plan_covers_each_weekday_once(#[case] goal: Goal) {
        let input = input(goal);
        let bmi = bmi_for(&input);
        let plan = PlanGenerator::local_plan(&input, &bmi);

        let days: Vec<&str> = plan.weekly_schedule.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(
            days,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn test_local_plan_stamps_fitness_level() {
        let mut input = input(Goal::Lose);
        input.fitness_level = FitnessLevel::Advanced;
        let bmi = bmi_for(&input);
        let plan = PlanGenerator::local_plan(&input, &bmi);

        assert!(plan
            .exercises
            .iter()
            .all(|e| e.difficulty == FitnessLevel::Advanced));
    }

    #[test]
    fn test_local_plan_description_carries_bmi() {
        let input = input(Goal::Maintain);
        let bmi = bmi_for(&input);
        let plan = PlanGenerator::local_plan(&input, &bmi);

        assert!(plan.description.contains("22.9"));
        assert!(plan.description.contains("Normal"));
        assert_eq!(plan.bmi_category, "Normal");
    }

    #[test]
    fn test_local_plan_is_deterministic() {
        let input = input(Goal::Gain);
        let bmi = bmi_for(&input);
        assert_eq!(
            PlanGenerator::local_plan(&input, &bmi),
            PlanGenerator::local_plan(&input, &bmi)
        );
    }

    #[tokio::test]
    async fn test_generate_without_credential_uses_local_template() {
        let gateway = DelegationGateway::new(&crate::config::AiConfig::default()).unwrap();
        let input = input(Goal::Lose);

        let (bmi, plan) = PlanGenerator::generate(&gateway, &input, None).await.unwrap();
        assert_eq!(bmi.value, 22.9);
        assert_eq!(plan.title, "Fat Burning Program");
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_input() {
        let gateway = DelegationGateway::new(&crate::config::AiConfig::default()).unwrap();
        let mut bad = input(Goal::Lose);
        bad.height_value = 0.0;

        let err = PlanGenerator::generate(&gateway, &bad, None).await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidInput(_)));
    }

    #[test]
    fn test_contract_rejects_short_week() {
        let input = input(Goal::Lose);
        let bmi = bmi_for(&input);
        let mut plan = PlanGenerator::local_plan(&input, &bmi);
        plan.weekly_schedule.truncate(5);
        assert!(plan.enforce().is_err());
    }

    #[test]
    fn test_contract_rejects_empty_exercises() {
        let input = input(Goal::Lose);
        let bmi = bmi_for(&input);
        let mut plan = PlanGenerator::local_plan(&input, &bmi);
        plan.exercises.clear();
        assert!(plan.enforce().is_err());
    }

    #[test]
    fn test_contract_rejects_zero_sets() {
        let input = input(Goal::Lose);
        let bmi = bmi_for(&input);
        let mut plan = PlanGenerator::local_plan(&input, &bmi);
        plan.exercises[0].sets = 0;
        assert!(plan.enforce().is_err());
    }
}
