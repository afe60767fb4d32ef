/// Represents the observable side of a discrete-time environment with a single agent.
///
/// Environments implementing this trait only describe where the agent is and what
/// it may do next; moving the agent is left to whoever owns the environment.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Get the current state of the environment
    fn state(&self) -> Self::State;

    /// Determine if the current state is valid for the agent to act from
    fn is_active(&self) -> bool;
}

/// An environment with a finite, state-dependent set of actions
pub trait DiscreteActionSpace: Environment {
    /// Get the available actions for the current state
    ///
    /// Unlike environments with a fixed action set, the returned `Vec` may be empty
    /// when the agent is boxed in.
    fn actions(&self) -> Vec<Self::Action>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A line of `N` cells where the agent can always step one cell left or right
    pub struct MockEnv<const N: i32> {
        pub pos: i32,
    }

    impl<const N: i32> Environment for MockEnv<N> {
        type State = i32;
        type Action = i32;

        fn state(&self) -> Self::State {
            self.pos
        }

        fn is_active(&self) -> bool {
            (0..N).contains(&self.pos)
        }
    }

    impl<const N: i32> DiscreteActionSpace for MockEnv<N> {
        fn actions(&self) -> Vec<Self::Action> {
            [self.pos - 1, self.pos + 1]
                .into_iter()
                .filter(|p| (0..N).contains(p))
                .collect()
        }
    }

    fn first_action<E: DiscreteActionSpace>(env: &E) -> Option<E::Action> {
        env.actions().into_iter().next()
    }

    #[test]
    fn generic_consumer() {
        let env = MockEnv::<3> { pos: 0 };
        assert!(env.is_active(), "Env is active");
        assert_eq!(env.state(), 0, "State reported");
        assert_eq!(first_action(&env), Some(1), "Only right is available");

        let env = MockEnv::<1> { pos: 0 };
        assert_eq!(first_action(&env), None, "Boxed-in env has no actions");
    }
}
