//! Wait-time modelling for a bank of service lines.
//!
//! `model` holds the linear containers (a doubly-linked list and the queue,
//! stack and deque built on it). `simulation` drives queues through a
//! Poisson arrival process with shortest-line routing and reports the
//! average wait for each number of open lines.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;

pub use error::{ConfigError, ReportError};
pub use model::deque::LinkedDeque;
pub use model::list::DoublyLinkedList;
pub use model::queues::LinkedQueue;
pub use model::stack::LinkedStack;
pub use model::traits::{Deque, Queue, Stack};
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{ConfigurationResult, SimulationReport, WaitSimulation};
