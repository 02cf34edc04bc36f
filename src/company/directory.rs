//! In-memory company directory and its read queries

use super::model::{Company, CompanyError, CompanyStatus};
use std::collections::HashSet;

/// Read-only set of companies, validated on construction
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

#[allow(dead_code)] // Lookup and search queries serve views that follow sign-in
impl CompanyDirectory {
    pub fn new(companies: Vec<Company>) -> Result<Self, CompanyError> {
        let mut seen = HashSet::new();
        for company in &companies {
            company.validate()?;
            if !seen.insert(company.id) {
                return Err(CompanyError::DuplicateId(company.id));
            }
        }
        Ok(Self { companies })
    }

    /// Every company, in the order they were listed
    pub fn all(&self) -> &[Company] {
        &self.companies
    }

    pub fn by_id(&self, id: u64) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Exact name match
    pub fn by_name(&self, name: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.name == name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    pub fn with_status(&self, status: CompanyStatus) -> Vec<&Company> {
        self.filter(|c| c.status == status)
    }

    pub fn without_status(&self, status: CompanyStatus) -> Vec<&Company> {
        self.filter(|c| c.status != status)
    }

    pub fn active(&self) -> Vec<&Company> {
        self.filter(Company::is_active)
    }

    /// Companies whose name contains `keyword` (case-sensitive)
    pub fn search(&self, keyword: &str) -> Vec<&Company> {
        self.filter(|c| c.name.contains(keyword))
    }

    pub fn search_ignore_case(&self, keyword: &str) -> Vec<&Company> {
        let keyword = keyword.to_lowercase();
        self.filter(|c| c.name.to_lowercase().contains(&keyword))
    }

    pub fn search_with_status(&self, keyword: &str, status: CompanyStatus) -> Vec<&Company> {
        self.filter(|c| c.status == status && c.name.contains(keyword))
    }

    /// All companies ordered by name
    pub fn sorted(&self) -> Vec<&Company> {
        let mut companies: Vec<_> = self.companies.iter().collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        companies
    }

    pub fn sorted_with_status(&self, status: CompanyStatus) -> Vec<&Company> {
        let mut companies = self.with_status(status);
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        companies
    }

    pub fn count(&self) -> usize {
        self.companies.len()
    }

    pub fn count_with_status(&self, status: CompanyStatus) -> usize {
        self.companies.iter().filter(|c| c.status == status).count()
    }

    pub fn count_matching(&self, keyword: &str) -> usize {
        self.search(keyword).len()
    }

    fn filter(&self, predicate: impl Fn(&Company) -> bool) -> Vec<&Company> {
        self.companies.iter().filter(|c| predicate(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn directory() -> CompanyDirectory {
        CompanyDirectory::new(vec![
            Company::new(1, "Qcheck Labs", CompanyStatus::Active),
            Company::new(2, "Acme", CompanyStatus::Suspended),
            Company::new(3, "qcheck partners", CompanyStatus::Inactive),
            Company::new(4, "Beta Qcheck", CompanyStatus::Active),
        ])
        .unwrap()
    }

    fn names(companies: Vec<&Company>) -> Vec<&str> {
        companies.into_iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = CompanyDirectory::new(vec![
            Company::new(1, "A", CompanyStatus::Active),
            Company::new(1, "B", CompanyStatus::Active),
        ])
        .unwrap_err();
        assert_eq!(err, CompanyError::DuplicateId(1));
    }

    #[test]
    fn test_rejects_invalid_name() {
        let err = CompanyDirectory::new(vec![Company::new(9, "", CompanyStatus::Active)])
            .unwrap_err();
        assert_eq!(err, CompanyError::EmptyName { id: 9 });
    }

    #[test]
    fn test_lookups() {
        let dir = directory();
        assert_eq!(dir.by_id(2).map(|c| c.name.as_str()), Some("Acme"));
        assert!(dir.by_id(99).is_none());
        assert_eq!(dir.by_name("Acme").map(|c| c.id), Some(2));
        assert!(dir.by_name("acme").is_none());
        assert!(dir.exists("Beta Qcheck"));
        assert!(!dir.exists("Gamma"));
    }

    #[test]
    fn test_status_queries() {
        let dir = directory();
        assert_eq!(names(dir.active()), vec!["Qcheck Labs", "Beta Qcheck"]);
        assert_eq!(names(dir.with_status(CompanyStatus::Suspended)), vec!["Acme"]);
        assert_eq!(
            names(dir.without_status(CompanyStatus::Active)),
            vec!["Acme", "qcheck partners"]
        );
        assert_eq!(dir.count(), 4);
        assert_eq!(dir.count_with_status(CompanyStatus::Active), 2);
        assert_eq!(dir.count_with_status(CompanyStatus::Inactive), 1);
    }

    #[test]
    fn test_search() {
        let dir = directory();
        assert_eq!(names(dir.search("Qcheck")), vec!["Qcheck Labs", "Beta Qcheck"]);
        assert_eq!(dir.count_matching("Qcheck"), 2);
        assert_eq!(
            names(dir.search_ignore_case("QCHECK")),
            vec!["Qcheck Labs", "qcheck partners", "Beta Qcheck"]
        );
        assert_eq!(
            names(dir.search_with_status("Qcheck", CompanyStatus::Active)),
            vec!["Qcheck Labs", "Beta Qcheck"]
        );
        assert!(dir.search("zzz").is_empty());
    }

    #[test]
    fn test_sorted_by_name() {
        let dir = directory();
        assert_eq!(
            names(dir.sorted()),
            vec!["Acme", "Beta Qcheck", "Qcheck Labs", "qcheck partners"]
        );
        assert_eq!(
            names(dir.sorted_with_status(CompanyStatus::Active)),
            vec!["Beta Qcheck", "Qcheck Labs"]
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = CompanyDirectory::default();
        assert_eq!(dir.count(), 0);
        assert!(dir.all().is_empty());
        assert!(dir.active().is_empty());
    }
}
