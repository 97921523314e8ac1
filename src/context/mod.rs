/*!
The context --- to which beliefs are added and within which belief change takes place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the selection function applied during contraction.
This helps distinguish generic context methods against those intended for a particular
application.
In particular, [from_config](Context::from_config) is implemented for a context rather than a
generic context to avoid requiring a selection function to be supplied alongside a config.

# Example
```rust
# use doxa::config::Config;
# use doxa::context::Context;
# use doxa::reports::Report;
# use doxa::structures::formula::Formula;
let mut the_context = Context::from_config(Config::default());

let p = Formula::atom("p");
let q = Formula::atom("q");

the_context.add_belief_prioritized(p.clone(), 1);
the_context.add_belief_prioritized(Formula::or(vec![p.negate(), q.clone()]), 2);

assert_eq!(the_context.ask(&q), Ok(true));

let report = the_context.contract(&q).unwrap();
assert_eq!(report, Report::Contracted);
assert_eq!(the_context.ask(&q), Ok(false));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
