#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;


#[cfg(test)]
mod case_details_tests;

#[cfg(test)]
mod task_list_tests;

#[cfg(test)]
mod contact_details_tests;



#[cfg(test)]
mod contest_claim_tests;

#[cfg(test)]
mod employers_contract_claim_tests;

#[cfg(test)]
mod check_your_answers_tests;
