mod category;
mod course;
mod enrollment;
mod lesson;
mod payment;
mod report;
mod review;
