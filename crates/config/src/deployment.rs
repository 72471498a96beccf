use serde::{Deserialize, Serialize};

/// Contracts an account deploys on a network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub network: String,
    pub account: String,
    #[serde(default)]
    pub contracts: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deployments(Vec<Deployment>);

impl From<Vec<Deployment>> for Deployments {
    fn from(vec: Vec<Deployment>) -> Self {
        Self(vec)
    }
}

impl Deployments {
    /// Drops every deployment entry for `account`, returning how many were removed.
    pub fn remove_account(&mut self, account: &str) -> usize {
        let len = self.0.len();
        self.0.retain(|d| d.account != account);
        len - self.0.len()
    }

    /// Strips `contract` from every deployment list.
    pub fn remove_contract(&mut self, contract: &str) {
        for deployment in self.0.iter_mut() {
            deployment.contracts.retain(|c| c != contract);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Deployment> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
