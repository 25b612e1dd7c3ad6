pub mod company_service;
