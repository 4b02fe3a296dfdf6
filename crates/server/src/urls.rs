//! Page paths.

pub const CASE_DETAILS: &str = "/case-details";
pub const RESPONDENT_RESPONSE_LANDING: &str = "/respondent-response-landing";
pub const RESPONDENT_RESPONSE_TASK_LIST: &str = "/respondent-response-task-list";

// Contact details
pub const RESPONDENT_NAME: &str = "/respondent-name";
pub const HEARING_PREFERENCES: &str = "/hearing-preferences";
pub const RESPONDENT_CONTACT_PREFERENCES: &str = "/respondent-contact-preferences";

// Employer details
pub const RESPONDENT_EMPLOYEES: &str = "/respondent-employees";

// Conciliation and employee details
pub const ACAS_EARLY_CONCILIATION_CERTIFICATE: &str = "/acas-early-conciliation-certificate";
pub const CLAIMANT_EMPLOYMENT_DATES: &str = "/claimant-employment-dates";
pub const CLAIMANT_EMPLOYMENT_DATES_ENTER: &str = "/claimant-employment-dates-enter";
pub const IS_CLAIMANT_EMPLOYMENT_CONTINUING: &str = "/is-claimant-employment-continuing";
pub const CLAIMANT_JOB_TITLE: &str = "/claimant-job-title";
pub const CLAIMANT_AVERAGE_WEEKLY_WORK_HOURS: &str = "/claimant-average-weekly-work-hours";

// Pay, pension and benefits
pub const CLAIMANT_PAY_DETAILS: &str = "/claimant-pay-details";

// Contest claim
pub const RESPONDENT_CONTEST_CLAIM: &str = "/respondent-contest-claim";
pub const RESPONDENT_CONTEST_CLAIM_REASON: &str = "/respondent-contest-claim-reason";

// Employer's contract claim
pub const EMPLOYERS_CONTRACT_CLAIM: &str = "/employers-contract-claim";

pub const CHECK_YOUR_ANSWERS_ET3: &str = "/check-your-answers-et3";
pub const APPLICATION_SUBMITTED: &str = "/application-submitted";

// Case details sections
pub const CLAIMANT_DETAILS: &str = "/claimant-details";
pub const CLAIMANT_ET1_FORM: &str = "/claimant-et1-form";
pub const HEARING_DETAILS: &str = "/hearing-details";
pub const RESPONDENT_APPLICATIONS: &str = "/respondent-applications";
pub const CLAIMANT_APPLICATIONS: &str = "/claimant-applications";
pub const CONTACT_TRIBUNAL: &str = "/contact-tribunal";
pub const TRIBUNAL_ORDERS: &str = "/tribunal-orders";
pub const TRIBUNAL_JUDGEMENTS: &str = "/tribunal-judgements";
pub const CASE_DOCUMENTS: &str = "/case-documents";

pub const GET_CASE_DOCUMENT: &str = "/getCaseDocument";
pub const NOT_FOUND: &str = "/not-found";
pub const HEALTH: &str = "/health";
