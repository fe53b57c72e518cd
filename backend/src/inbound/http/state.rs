//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they stay testable without a database.

use std::sync::Arc;

use crate::domain::EmployeeService;
use crate::domain::ports::{EmployeeRepository, EmployeesCommand, EmployeesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeesCommand>,
    pub employees_query: Arc<dyn EmployeesQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        employees: Arc<dyn EmployeesCommand>,
        employees_query: Arc<dyn EmployeesQuery>,
    ) -> Self {
        Self {
            employees,
            employees_query,
        }
    }

    /// Wire both ports to one [`EmployeeService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employeemgt::inbound::http::state::HttpState;
    /// use employeemgt::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()));
    /// let _query = state.employees_query.clone();
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: EmployeeRepository + 'static,
    {
        let service = Arc::new(EmployeeService::new(repository));
        Self::new(service.clone(), service)
    }
}
