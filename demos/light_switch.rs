//! Believing the switch works, and that a working switch keeps the light on --- and then
//! seeing the light go out.

use doxa::{config::Config, context::Context, structures::formula::Formula};

fn main() {
    let mut agent = Context::from_config(Config::default());

    let light_on = Formula::atom("light_on");
    let switch_works = Formula::atom("switch_works");

    agent.add_belief_prioritized(switch_works.clone(), 1);
    agent.add_belief_prioritized(Formula::implies(switch_works.clone(), light_on.clone()), 2);

    println!("Initial beliefs:\n{}", agent.belief_db);
    println!("Is the light on? {:?}", agent.ask(&light_on));

    // News: the light is off.
    let report = agent
        .revise(light_on.negate())
        .expect("normalised formulas extract cleanly");

    println!("\nAfter revising by ¬light_on ({report}):\n{}", agent.belief_db);
    println!("Is the light on? {:?}", agent.ask(&light_on));
    println!("Does the switch work? {:?}", agent.ask(&switch_works));
}
