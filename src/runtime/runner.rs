use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, SystemEvent};
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::app::AppState;
use crate::submit::SubmitExecutor;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    key_bindings: KeyBindings,
    executor: SubmitExecutor,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal, executor: SubmitExecutor) -> Self {
        Self {
            state,
            terminal,
            key_bindings: KeyBindings::new(),
            executor,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                self.process_completions()?;
                let event = self.terminal.poll_event(POLL_TIMEOUT)?;
                self.dispatch_app_event(AppEvent::Terminal(event))?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn process_completions(&mut self) -> io::Result<()> {
        for completion in self.executor.drain_ready() {
            self.dispatch_app_event(AppEvent::System(SystemEvent::SubmitCompleted {
                completion,
            }))?;
        }
        Ok(())
    }

    fn dispatch_app_event(&mut self, event: AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Terminal(TerminalEvent::Resize(size)) => {
                self.terminal.set_size(size);
                self.render()
            }
            AppEvent::Terminal(TerminalEvent::Key(key)) => {
                let intent = self.key_bindings.resolve_or_input(key);
                self.process_intent(intent)
            }
            AppEvent::Terminal(TerminalEvent::Tick) => self.process_intent(Intent::Tick),
            AppEvent::System(event) => {
                if self.state.handle_system_event(event) {
                    self.render()?;
                }
                Ok(())
            }
        }
    }

    fn process_intent(&mut self, intent: Intent) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Action(action) => {
                    render_requested |= self.state.handle_action(action);
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        self.spawn_pending();
        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn spawn_pending(&mut self) {
        for ticket in self.state.take_pending_submissions() {
            self.executor.spawn(ticket);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = Renderer::render(&self.state);
        self.terminal.render_frame(&frame)
    }
}
