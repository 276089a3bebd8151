//! Behavioural tests for accumulating validation.
//!
//! These tests bind the Gherkin scenarios in
//! `tests/features/accumulation.feature` to the public engine API.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use verdict::{
    Check, Field, Outcome, ValidationPlan, Violations, fault_message, lift_predicate, run_plan,
    run_single,
};

// ============================================================================
// Test fixtures and constants
// ============================================================================

const EMPTY_NAME: &str = "Name must not be empty";
const NAME_TOO_LONG: &str = "Maximum length of 7 chars exceeded";
const NAME_NOT_LETTERS: &str = "name must contain only letters";
const UNDER_AGE: &str = "You must be at least 18 to buy beer";
const FAULTING_CHECK: &str = "profile lookup";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: String,
    age: u32,
}

fn standard_name_rules() -> Vec<Check<String>> {
    vec![
        lift_predicate(|name: &String| name.is_empty(), EMPTY_NAME),
        lift_predicate(|name: &String| name.chars().count() > 7, NAME_TOO_LONG),
        lift_predicate(
            |name: &String| !name.chars().all(char::is_alphabetic),
            NAME_NOT_LETTERS,
        ),
    ]
}

/// Test world holding inputs and validation outcomes.
#[derive(Default, ScenarioState)]
struct World {
    name_rules: Slot<Vec<Check<String>>>,
    name_input: Slot<String>,
    age_input: Slot<u32>,
    name_outcome: Slot<Outcome<String>>,
    applicant_outcome: Slot<Outcome<Person>>,
}

impl World {
    /// Extracts the messages reported for the name, failing if it was valid.
    fn name_messages(&self) -> Vec<String> {
        self.name_outcome
            .get()
            .expect("name should be validated")
            .into_result()
            .err()
            .map(Violations::into_messages)
            .expect("name validation should fail")
    }

    /// Extracts the applicant outcome from the world state.
    fn applicant_outcome(&self) -> Outcome<Person> {
        self.applicant_outcome
            .get()
            .expect("applicant should be validated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the standard name rules")]
fn the_standard_name_rules(world: &World) {
    world.name_rules.set(standard_name_rules());
}

#[given("a faulting check ahead of the standard name rules")]
fn a_faulting_check_ahead_of_the_standard_name_rules(world: &World) {
    let mut rules = vec![Check::rule(
        FAULTING_CHECK,
        |_: &String| -> Result<(), Violations> { panic!("profile was never loaded") },
    )];
    rules.extend(standard_name_rules());
    world.name_rules.set(rules);
}

#[given("an empty name")]
fn an_empty_name(world: &World) {
    world.name_input.set(String::new());
}

#[given("the name Dennis42")]
fn the_name_dennis42(world: &World) {
    world.name_input.set("Dennis42".to_owned());
}

#[given("an applicant with an empty name")]
fn an_applicant_with_an_empty_name(world: &World) {
    world.name_input.set(String::new());
}

#[given("an applicant named Dennis")]
fn an_applicant_named_dennis(world: &World) {
    world.name_input.set("Dennis".to_owned());
}

#[given("the applicant is aged {age:u32}")]
fn the_applicant_is_aged(world: &World, age: u32) {
    world.age_input.set(age);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the name is validated")]
fn the_name_is_validated(world: &World) {
    let rules = world.name_rules.get().expect("name rules should be set");
    let name = world.name_input.get().expect("name input should be set");
    world.name_outcome.set(run_single(&rules, name));
}

#[when("the applicant is validated")]
fn the_applicant_is_validated(world: &World) {
    let plan = ValidationPlan::new(
        (
            Field::new("name", standard_name_rules()),
            Field::new(
                "age",
                [lift_predicate(|age: &u32| *age < 18, UNDER_AGE)],
            ),
        ),
        |(name, age)| Person { name, age },
    );
    let name = world.name_input.get().expect("name input should be set");
    let age = world.age_input.get().expect("age input should be set");
    world.applicant_outcome.set(run_plan(&plan, (name, age)));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("validation reports only the empty-name rule")]
fn validation_reports_only_the_empty_name_rule(world: &World) {
    assert_eq!(world.name_messages(), [EMPTY_NAME]);
}

#[then("validation reports the length rule and then the letters rule")]
fn validation_reports_the_length_rule_and_then_the_letters_rule(world: &World) {
    assert_eq!(world.name_messages(), [NAME_TOO_LONG, NAME_NOT_LETTERS]);
}

#[then("validation reports the fault and then the empty-name rule")]
fn validation_reports_the_fault_and_then_the_empty_name_rule(world: &World) {
    assert_eq!(
        world.name_messages(),
        [fault_message(FAULTING_CHECK), EMPTY_NAME.to_owned()]
    );
}

#[then("validation reports the empty-name rule and then the age rule")]
fn validation_reports_the_empty_name_rule_and_then_the_age_rule(world: &World) {
    let messages = world
        .applicant_outcome()
        .into_result()
        .err()
        .map(Violations::into_messages)
        .expect("applicant validation should fail");
    assert_eq!(messages, [EMPTY_NAME, UNDER_AGE]);
}

#[then("the applicant is accepted as Dennis aged 42")]
fn the_applicant_is_accepted_as_dennis_aged_42(world: &World) {
    assert_eq!(
        world.applicant_outcome(),
        Outcome::Valid(Person {
            name: "Dennis".to_owned(),
            age: 42,
        })
    );
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/accumulation.feature",
    name = "An empty name reports the empty-name rule"
)]
fn an_empty_name_reports_the_empty_name_rule(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/accumulation.feature",
    name = "A long name with digits reports every broken rule in order"
)]
fn a_long_name_with_digits_reports_every_broken_rule_in_order(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/accumulation.feature",
    name = "A faulting check is recorded without hiding later rules"
)]
fn a_faulting_check_is_recorded_without_hiding_later_rules(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/accumulation.feature",
    name = "Invalid applicants see problems from every field"
)]
fn invalid_applicants_see_problems_from_every_field(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/accumulation.feature",
    name = "Valid applicants are combined into a person"
)]
fn valid_applicants_are_combined_into_a_person(world: World) {
    let _ = world;
}
